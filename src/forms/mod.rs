//! Form editing core: field validation, save orchestration, and change
//! notification.
//!
//! The UI panels own a [`FormController`] per entity dialog. The controller is
//! deliberately independent of egui so the save flow can be unit tested: build
//! the candidate from the form fields, validate every field in one pass,
//! persist through a [`SaveService`], then notify registered
//! [`DataChangeListener`]s in registration order and close.

pub mod controller;
pub mod department;
pub mod seller;
pub mod validation;

pub use controller::{DataChangeListener, FormController, FormFields, SaveOutcome, SaveService};
pub use department::DepartmentFields;
pub use seller::SellerFields;
pub use validation::ValidationErrors;

/// Parse date input flexibly, accepting multiple formats.
pub fn parse_flexible_date(input: &str) -> Option<chrono::NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for fmt in &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%d/%m/%Y"] {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_flexible_date;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_flexible_date_formats() {
        let expected = NaiveDate::from_ymd_opt(1994, 12, 3).unwrap();
        assert_eq!(parse_flexible_date("1994-12-03"), Some(expected));
        assert_eq!(parse_flexible_date("1994/12/03"), Some(expected));
        assert_eq!(parse_flexible_date("03/12/1994"), Some(expected));
        assert_eq!(parse_flexible_date(" 1994-12-03 "), Some(expected));
    }

    #[test]
    fn test_parse_flexible_date_rejects_garbage() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("yesterday"), None);
        assert_eq!(parse_flexible_date("1994-13-40"), None);
    }
}
