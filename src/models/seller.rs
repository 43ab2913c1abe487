//! Seller domain type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::sellers;

/// A seller record.
///
/// `id` is `None` until the record has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub base_salary: f64,
    pub department_id: Option<i32>,
}

impl Default for Seller {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            birth_date: NaiveDate::default(),
            base_salary: 0.0,
            department_id: None,
        }
    }
}

impl From<sellers::Model> for Seller {
    fn from(model: sellers::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            email: model.email,
            birth_date: model.birth_date,
            base_salary: model.base_salary,
            department_id: model.department_id,
        }
    }
}
