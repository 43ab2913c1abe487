//! Seller repository with CRUD operations.

use crate::entities::{prelude::*, sellers};
use crate::models::Seller;
use sea_orm::*;

/// List all sellers ordered by name.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Seller>, DbErr> {
    let models = Sellers::find().order_by_asc(sellers::Column::Name).all(db).await?;

    Ok(models.into_iter().map(Seller::from).collect())
}

/// Get seller by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Seller>, DbErr> {
    let model = Sellers::find_by_id(id).one(db).await?;
    Ok(model.map(Seller::from))
}

/// Insert or update a seller.
///
/// A record without an id is inserted and comes back with the database-assigned
/// id; a record with an id updates the existing row.
pub async fn save_or_update(db: &DatabaseConnection, data: Seller) -> Result<Seller, DbErr> {
    match data.id {
        None => {
            let model = sellers::ActiveModel {
                name: Set(data.name),
                email: Set(data.email),
                birth_date: Set(data.birth_date),
                base_salary: Set(data.base_salary),
                department_id: Set(data.department_id),
                ..Default::default()
            };
            let inserted = model.insert(db).await?;
            Ok(Seller::from(inserted))
        }
        Some(id) => {
            let existing = Sellers::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("Seller {id} not found")))?;

            let mut active: sellers::ActiveModel = existing.into();
            active.name = Set(data.name);
            active.email = Set(data.email);
            active.birth_date = Set(data.birth_date);
            active.base_salary = Set(data.base_salary);
            active.department_id = Set(data.department_id);

            let updated = active.update(db).await?;
            Ok(Seller::from(updated))
        }
    }
}

/// Delete a seller by ID.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = Sellers::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
