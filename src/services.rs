//! Synchronous persistence services for the edit dialogs.
//!
//! Saves run on the UI thread and block for the duration of the database
//! call, which keeps the save/notify/close sequence strictly ordered. List
//! loads and deletes stay asynchronous (see `ui::app`).

use sea_orm::{DatabaseConnection, DbErr};
use tokio::runtime::Handle;

use crate::db;
use crate::error::AppError;
use crate::forms::SaveService;
use crate::models::{Department, Seller};

/// Department persistence facade.
pub struct DepartmentService {
    handle: Handle,
    pool: DatabaseConnection,
}

impl DepartmentService {
    pub fn new(handle: Handle, pool: DatabaseConnection) -> Self {
        Self { handle, pool }
    }
}

impl SaveService for DepartmentService {
    type Entity = Department;

    fn save_or_update(&mut self, entity: Department) -> Result<Department, AppError> {
        self.handle
            .block_on(db::department::save_or_update(&self.pool, entity))
            .map_err(friendly_db_error)
    }
}

/// Seller persistence facade.
pub struct SellerService {
    handle: Handle,
    pool: DatabaseConnection,
}

impl SellerService {
    pub fn new(handle: Handle, pool: DatabaseConnection) -> Self {
        Self { handle, pool }
    }
}

impl SaveService for SellerService {
    type Entity = Seller;

    fn save_or_update(&mut self, entity: Seller) -> Result<Seller, AppError> {
        self.handle
            .block_on(db::seller::save_or_update(&self.pool, entity))
            .map_err(friendly_db_error)
    }
}

/// Surface a missing update target as a not-found error instead of a raw
/// database error.
fn friendly_db_error(e: DbErr) -> AppError {
    match e {
        DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
        other => AppError::Database(other),
    }
}
