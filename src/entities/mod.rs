//! SeaORM entity definitions (database-first).

pub mod departments;
pub mod sellers;

pub mod prelude {
    pub use super::departments::Entity as Departments;
    pub use super::sellers::Entity as Sellers;
}
