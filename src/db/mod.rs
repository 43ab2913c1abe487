//! Database access layer.

pub mod connection;
pub mod department;
pub mod seller;

pub use connection::{connect, get_table_counts, get_version, test_connection};
