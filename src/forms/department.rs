//! Department edit form fields.

use crate::models::Department;

use super::controller::FormFields;
use super::validation::{FIELD_EMPTY, ValidationErrors};

/// Max length for the department name input.
pub const NAME_MAX_LEN: usize = 30;

/// Editable field state for the department dialog.
#[derive(Default, Clone)]
pub struct DepartmentFields {
    /// Identifier from the entity under edit; never fabricated by the form.
    pub id: Option<i32>,
    pub name: String,
    pub is_editing: bool,
}

impl FormFields for DepartmentFields {
    type Entity = Department;

    fn populate_from(&mut self, entity: &Department) {
        self.id = entity.id;
        self.name = entity.name.clone();
        self.is_editing = entity.id.is_some();
    }

    fn build(&self) -> Result<Department, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", FIELD_EMPTY);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Department {
            id: self.id,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_trims_name() {
        let fields = DepartmentFields {
            id: None,
            name: "  Books  ".to_string(),
            is_editing: false,
        };

        let dept = fields.build().unwrap();
        assert_eq!(dept.name, "Books");
        assert_eq!(dept.id, None);
    }

    #[test]
    fn test_build_keeps_existing_id() {
        let fields = DepartmentFields {
            id: Some(3),
            name: "Books".to_string(),
            is_editing: true,
        };

        let dept = fields.build().unwrap();
        assert_eq!(dept.id, Some(3));
    }

    #[test]
    fn test_blank_name_is_an_error() {
        let fields = DepartmentFields {
            name: " \t ".to_string(),
            ..Default::default()
        };

        let errors = fields.build().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(FIELD_EMPTY));
    }

    #[test]
    fn test_populate_marks_editing() {
        let mut fields = DepartmentFields::default();
        fields.populate_from(&Department::new(Some(7), "Tools"));

        assert_eq!(fields.id, Some(7));
        assert_eq!(fields.name, "Tools");
        assert!(fields.is_editing);
    }

    #[test]
    fn test_populate_new_record_is_not_editing() {
        let mut fields = DepartmentFields::default();
        fields.populate_from(&Department::default());

        assert_eq!(fields.id, None);
        assert!(!fields.is_editing);
    }
}
