//! Seller edit form fields.

use chrono::NaiveDate;

use crate::models::Seller;

use super::controller::FormFields;
use super::parse_flexible_date;
use super::validation::{FIELD_EMPTY, ValidationErrors};

/// Max length for the seller name input.
pub const NAME_MAX_LEN: usize = 70;
/// Max length for the email input.
pub const EMAIL_MAX_LEN: usize = 60;

/// Editable field state for the seller dialog.
///
/// Birth date is kept both as the raw text input and as the parsed date so
/// the dialog can flag an unparsable value while the user is still typing.
#[derive(Default, Clone)]
pub struct SellerFields {
    /// Identifier from the entity under edit; never fabricated by the form.
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub birth_date_input: String,
    pub birth_date: Option<NaiveDate>,
    pub base_salary: String,
    pub department_id: Option<i32>,
    pub is_editing: bool,
}

impl SellerFields {
    /// Re-parse the birth date after the text input changed.
    pub fn reparse_birth_date(&mut self) {
        self.birth_date = parse_flexible_date(&self.birth_date_input);
    }
}

impl FormFields for SellerFields {
    type Entity = Seller;

    fn populate_from(&mut self, entity: &Seller) {
        self.id = entity.id;
        self.name = entity.name.clone();
        self.email = entity.email.clone();
        self.department_id = entity.department_id;
        self.is_editing = entity.id.is_some();

        if entity.id.is_some() {
            self.birth_date = Some(entity.birth_date);
            self.birth_date_input = entity.birth_date.format("%Y-%m-%d").to_string();
            self.base_salary = format!("{:.2}", entity.base_salary);
        } else {
            self.birth_date = None;
            self.birth_date_input = String::new();
            self.base_salary = String::new();
        }
    }

    fn build(&self) -> Result<Seller, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", FIELD_EMPTY);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", FIELD_EMPTY);
        }

        let birth_date = if self.birth_date_input.trim().is_empty() {
            errors.add("birth_date", FIELD_EMPTY);
            None
        } else {
            match self.birth_date {
                Some(date) => Some(date),
                None => {
                    errors.add("birth_date", "Invalid date");
                    None
                }
            }
        };

        let salary = self.base_salary.trim();
        let base_salary = if salary.is_empty() {
            errors.add("base_salary", FIELD_EMPTY);
            None
        } else {
            match salary.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.add("base_salary", "Must be a number");
                    None
                }
            }
        };

        match (birth_date, base_salary) {
            (Some(birth_date), Some(base_salary)) if errors.is_empty() => Ok(Seller {
                id: self.id,
                name: name.to_string(),
                email: email.to_string(),
                birth_date,
                base_salary,
                department_id: self.department_id,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> SellerFields {
        SellerFields {
            id: None,
            name: "Alex Green".to_string(),
            email: "alex@example.com".to_string(),
            birth_date_input: "1990-04-21".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 21),
            base_salary: "2500.00".to_string(),
            department_id: Some(2),
            is_editing: false,
        }
    }

    #[test]
    fn test_valid_fields_build() {
        let seller = valid_fields().build().unwrap();
        assert_eq!(seller.id, None);
        assert_eq!(seller.name, "Alex Green");
        assert_eq!(seller.email, "alex@example.com");
        assert_eq!(seller.birth_date, NaiveDate::from_ymd_opt(1990, 4, 21).unwrap());
        assert_eq!(seller.base_salary, 2500.0);
        assert_eq!(seller.department_id, Some(2));
    }

    #[test]
    fn test_all_blank_reports_every_field_in_one_pass() {
        let fields = SellerFields::default();
        let errors = fields.build().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some(FIELD_EMPTY));
        assert_eq!(errors.get("email"), Some(FIELD_EMPTY));
        assert_eq!(errors.get("birth_date"), Some(FIELD_EMPTY));
        assert_eq!(errors.get("base_salary"), Some(FIELD_EMPTY));
    }

    #[test]
    fn test_unparsable_salary_is_a_field_error() {
        let mut fields = valid_fields();
        fields.base_salary = "lots".to_string();

        let errors = fields.build().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("base_salary"), Some("Must be a number"));
    }

    #[test]
    fn test_unparsable_date_is_a_field_error() {
        let mut fields = valid_fields();
        fields.birth_date_input = "21st of April".to_string();
        fields.reparse_birth_date();

        let errors = fields.build().unwrap_err();
        assert_eq!(errors.get("birth_date"), Some("Invalid date"));
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let mut fields = valid_fields();
        fields.name = "  Alex Green ".to_string();
        fields.email = " alex@example.com ".to_string();

        let seller = fields.build().unwrap();
        assert_eq!(seller.name, "Alex Green");
        assert_eq!(seller.email, "alex@example.com");
    }

    #[test]
    fn test_populate_roundtrip() {
        let original = Seller {
            id: Some(9),
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 11, 2).unwrap(),
            base_salary: 3100.5,
            department_id: Some(1),
        };

        let mut fields = SellerFields::default();
        fields.populate_from(&original);
        assert!(fields.is_editing);
        assert_eq!(fields.base_salary, "3100.50");

        let rebuilt = fields.build().unwrap();
        assert_eq!(rebuilt, original);
    }
}
