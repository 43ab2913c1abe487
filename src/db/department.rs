//! Department repository with CRUD operations.

use crate::entities::{departments, prelude::*};
use crate::models::Department;
use sea_orm::*;

/// List all departments ordered by name.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Department>, DbErr> {
    let models = Departments::find()
        .order_by_asc(departments::Column::Name)
        .all(db)
        .await?;

    Ok(models.into_iter().map(Department::from).collect())
}

/// Get department by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Department>, DbErr> {
    let model = Departments::find_by_id(id).one(db).await?;
    Ok(model.map(Department::from))
}

/// Insert or update a department.
///
/// A record without an id is inserted and comes back with the database-assigned
/// id; a record with an id updates the existing row.
pub async fn save_or_update(db: &DatabaseConnection, data: Department) -> Result<Department, DbErr> {
    match data.id {
        None => {
            let model = departments::ActiveModel {
                name: Set(data.name),
                ..Default::default()
            };
            let inserted = model.insert(db).await?;
            Ok(Department::from(inserted))
        }
        Some(id) => {
            let existing = Departments::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("Department {id} not found")))?;

            let mut active: departments::ActiveModel = existing.into();
            active.name = Set(data.name);

            let updated = active.update(db).await?;
            Ok(Department::from(updated))
        }
    }
}

/// Delete a department by ID.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = Departments::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
