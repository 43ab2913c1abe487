pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod services;
pub mod ui;

pub use error::{AppError, Result};
