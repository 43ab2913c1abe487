//! Department domain type.

use serde::{Deserialize, Serialize};

use crate::entities::departments;

/// A department record.
///
/// `id` is `None` until the record has been persisted; the database assigns
/// the identifier on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: Option<i32>,
    pub name: String,
}

impl Department {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
        }
    }
}
