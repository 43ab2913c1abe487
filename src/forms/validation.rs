//! Per-field validation error accumulation.

/// Message used for required fields left blank.
pub const FIELD_EMPTY: &str = "Field can't be empty";

/// An ordered set of field-name to error-message pairs.
///
/// Built fresh per validation attempt. All field checks run before a failure
/// is reported, so one pass surfaces every offending field at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. Keeps insertion order.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push((field.into(), message.into()));
    }

    /// Get the message for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Iterate over (field, message) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_add_and_get() {
        let mut errors = ValidationErrors::new();
        errors.add("name", FIELD_EMPTY);
        errors.add("email", "Invalid email");

        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some(FIELD_EMPTY));
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(errors.get("base_salary"), None);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "a");
        errors.add("email", "b");
        errors.add("birth_date", "c");

        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["name", "email", "birth_date"]);
    }

    #[test]
    fn test_clear() {
        let mut errors = ValidationErrors::new();
        errors.add("name", FIELD_EMPTY);
        errors.clear();
        assert!(errors.is_empty());
    }
}
