//! Form save orchestration and change notification.

use crate::error::AppError;

use super::validation::ValidationErrors;

/// String-typed form state for one entity kind.
///
/// Implementors copy entity values into editable fields and rebuild a
/// candidate entity from them, reporting every invalid field in one pass.
pub trait FormFields: Default {
    type Entity;

    /// Copy entity values into the form fields for editing.
    fn populate_from(&mut self, entity: &Self::Entity);

    /// Build a candidate entity from the current field values.
    ///
    /// Runs all field checks before failing so the returned errors cover
    /// every offending field at once.
    fn build(&self) -> Result<Self::Entity, ValidationErrors>;
}

/// Persistence collaborator for a form.
pub trait SaveService {
    type Entity;

    /// Insert-if-absent-else-update. On success the returned entity carries
    /// the database-assigned identifier.
    fn save_or_update(&mut self, entity: Self::Entity) -> Result<Self::Entity, AppError>;
}

/// Callback registered to run after a successful save.
pub trait DataChangeListener {
    fn on_data_changed(&mut self);
}

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Entity persisted, listeners notified, dialog closed.
    Saved,
    /// Field validation failed; per-field errors set, dialog stays open.
    Invalid,
    /// Persistence failed; alert message set, dialog stays open.
    Failed,
}

/// Controller for one edit dialog.
///
/// Owns the entity under edit, the persistence service, and the listener
/// registry. Entity and service are mandatory wiring; calling [`on_save`] or
/// [`populate_from_entity`] without them is a programming error and panics.
///
/// [`on_save`]: FormController::on_save
/// [`populate_from_entity`]: FormController::populate_from_entity
pub struct FormController<F: FormFields> {
    entity: Option<F::Entity>,
    service: Option<Box<dyn SaveService<Entity = F::Entity>>>,
    listeners: Vec<Box<dyn DataChangeListener>>,
    /// Editable field state, rendered by the dialog.
    pub fields: F,
    /// Field errors from the last failed validation attempt.
    pub errors: ValidationErrors,
    /// Persistence failure message for the modal alert.
    pub alert: Option<String>,
    open: bool,
}

impl<F: FormFields> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormFields> FormController<F> {
    pub fn new() -> Self {
        Self {
            entity: None,
            service: None,
            listeners: Vec::new(),
            fields: F::default(),
            errors: ValidationErrors::new(),
            alert: None,
            open: false,
        }
    }

    /// Set the entity under edit. A fresh default entity stands in for a new
    /// record; the form never fabricates an identifier itself.
    pub fn set_entity(&mut self, entity: F::Entity) {
        self.entity = Some(entity);
    }

    /// Wire the persistence service. Must happen before any save.
    pub fn set_service(&mut self, service: Box<dyn SaveService<Entity = F::Entity>>) {
        self.service = Some(service);
    }

    /// Register a listener to be notified after each successful save.
    /// Invocation follows registration order.
    pub fn subscribe_data_change_listener(&mut self, listener: Box<dyn DataChangeListener>) {
        self.listeners.push(listener);
    }

    /// Copy entity values into the form fields.
    ///
    /// # Panics
    /// Panics if no entity was set.
    pub fn populate_from_entity(&mut self) {
        let entity = self.entity.as_ref().expect("entity was not set before populate");
        self.fields.populate_from(entity);
    }

    /// Open the dialog for the given entity: reset fields, populate, clear
    /// stale errors.
    pub fn open_with(&mut self, entity: F::Entity) {
        self.set_entity(entity);
        self.fields = F::default();
        self.populate_from_entity();
        self.errors.clear();
        self.alert = None;
        self.open = true;
    }

    /// Validate, persist, notify, close.
    ///
    /// On validation failure the per-field errors are stored and the dialog
    /// stays open; the service is not invoked. On persistence failure the
    /// alert message is stored and the dialog stays open; no listener runs.
    /// Only after the service returns success is every listener invoked,
    /// exactly once, in registration order.
    ///
    /// # Panics
    /// Panics if entity or service was not set.
    pub fn on_save(&mut self) -> SaveOutcome {
        assert!(self.entity.is_some(), "entity was not set before save");
        let service = self.service.as_mut().expect("service was not set before save");

        let candidate = match self.fields.build() {
            Ok(candidate) => candidate,
            Err(errors) => {
                self.errors = errors;
                return SaveOutcome::Invalid;
            }
        };

        match service.save_or_update(candidate) {
            Ok(saved) => {
                self.entity = Some(saved);
                for listener in &mut self.listeners {
                    listener.on_data_changed();
                }
                self.errors.clear();
                self.alert = None;
                self.open = false;
                SaveOutcome::Saved
            }
            Err(e) => {
                self.alert = Some(e.to_string());
                SaveOutcome::Failed
            }
        }
    }

    /// Close the dialog without persisting. No side effects.
    pub fn on_cancel(&mut self) {
        self.errors.clear();
        self.alert = None;
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Entity under edit (the saved entity after a successful save).
    pub fn entity(&self) -> Option<&F::Entity> {
        self.entity.as_ref()
    }

    /// Clear the persistence alert after it has been shown.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sea_orm::DbErr;

    use super::*;
    use crate::forms::DepartmentFields;
    use crate::models::Department;

    /// Records every entity handed to it; assigns id 42 on insert.
    struct MockService {
        calls: Rc<RefCell<Vec<Department>>>,
        fail: bool,
    }

    impl SaveService for MockService {
        type Entity = Department;

        fn save_or_update(&mut self, entity: Department) -> Result<Department, AppError> {
            self.calls.borrow_mut().push(entity.clone());
            if self.fail {
                return Err(AppError::Database(DbErr::Custom("connection lost".to_string())));
            }
            Ok(Department {
                id: entity.id.or(Some(42)),
                name: entity.name,
            })
        }
    }

    struct RecordingListener {
        log: Rc<RefCell<Vec<&'static str>>>,
        tag: &'static str,
    }

    impl DataChangeListener for RecordingListener {
        fn on_data_changed(&mut self) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    fn controller_with(fail: bool) -> (FormController<DepartmentFields>, Rc<RefCell<Vec<Department>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut controller = FormController::new();
        controller.set_service(Box::new(MockService {
            calls: Rc::clone(&calls),
            fail,
        }));
        (controller, calls)
    }

    #[test]
    fn test_empty_name_reports_single_error_and_skips_service() {
        let (mut controller, calls) = controller_with(false);
        controller.open_with(Department::default());
        controller.fields.name = String::new();

        assert_eq!(controller.on_save(), SaveOutcome::Invalid);
        assert_eq!(controller.errors.len(), 1);
        assert_eq!(controller.errors.get("name"), Some("Field can't be empty"));
        assert!(calls.borrow().is_empty());
        assert!(controller.is_open());
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let (mut controller, calls) = controller_with(false);
        controller.open_with(Department::default());
        controller.fields.name = "   ".to_string();

        assert_eq!(controller.on_save(), SaveOutcome::Invalid);
        assert_eq!(controller.errors.get("name"), Some("Field can't be empty"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_save_notifies_listeners_in_order_and_closes() {
        let (mut controller, _calls) = controller_with(false);
        let log = Rc::new(RefCell::new(Vec::new()));
        controller.subscribe_data_change_listener(Box::new(RecordingListener {
            log: Rc::clone(&log),
            tag: "first",
        }));
        controller.subscribe_data_change_listener(Box::new(RecordingListener {
            log: Rc::clone(&log),
            tag: "second",
        }));

        controller.open_with(Department::default());
        controller.fields.name = "Electronics".to_string();

        assert_eq!(controller.on_save(), SaveOutcome::Saved);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
        assert!(!controller.is_open());
        assert_eq!(controller.entity().and_then(|d| d.id), Some(42));
    }

    #[test]
    fn test_listener_runs_once_per_save() {
        let (mut controller, _calls) = controller_with(false);
        let log = Rc::new(RefCell::new(Vec::new()));
        controller.subscribe_data_change_listener(Box::new(RecordingListener {
            log: Rc::clone(&log),
            tag: "only",
        }));

        controller.open_with(Department::default());
        controller.fields.name = "Books".to_string();
        assert_eq!(controller.on_save(), SaveOutcome::Saved);
        assert_eq!(log.borrow().len(), 1);

        controller.open_with(Department::new(Some(42), "Books"));
        assert_eq!(controller.on_save(), SaveOutcome::Saved);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_persistence_failure_keeps_dialog_open_without_notifying() {
        let (mut controller, calls) = controller_with(true);
        let log = Rc::new(RefCell::new(Vec::new()));
        controller.subscribe_data_change_listener(Box::new(RecordingListener {
            log: Rc::clone(&log),
            tag: "never",
        }));

        controller.open_with(Department::default());
        controller.fields.name = "Toys".to_string();

        assert_eq!(controller.on_save(), SaveOutcome::Failed);
        assert!(log.borrow().is_empty());
        assert!(controller.is_open());
        assert_eq!(calls.borrow().len(), 1);

        let alert = controller.alert.as_deref().unwrap();
        assert!(alert.contains("connection lost"));
    }

    #[test]
    fn test_roundtrip_populate_then_save_preserves_fields() {
        let (mut controller, calls) = controller_with(false);
        controller.open_with(Department::new(Some(3), "Books"));

        assert_eq!(controller.fields.name, "Books");
        assert_eq!(controller.on_save(), SaveOutcome::Saved);
        assert_eq!(calls.borrow()[0], Department::new(Some(3), "Books"));
    }

    #[test]
    fn test_edit_keeps_identifier_and_new_name() {
        let (mut controller, calls) = controller_with(false);
        controller.open_with(Department::new(Some(3), "Books"));
        controller.fields.name = "Office Supplies".to_string();

        assert_eq!(controller.on_save(), SaveOutcome::Saved);
        assert_eq!(calls.borrow()[0], Department::new(Some(3), "Office Supplies"));
    }

    #[test]
    fn test_cancel_closes_without_side_effects() {
        let (mut controller, calls) = controller_with(false);
        controller.open_with(Department::default());
        controller.fields.name = "Discarded".to_string();
        controller.on_cancel();

        assert!(!controller.is_open());
        assert!(calls.borrow().is_empty());
        assert!(controller.errors.is_empty());
    }

    #[test]
    #[should_panic(expected = "entity was not set")]
    fn test_save_without_entity_panics() {
        let (mut controller, _calls) = controller_with(false);
        controller.on_save();
    }

    #[test]
    #[should_panic(expected = "service was not set")]
    fn test_save_without_service_panics() {
        let mut controller: FormController<DepartmentFields> = FormController::new();
        controller.set_entity(Department::default());
        controller.fields.name = "Books".to_string();
        controller.on_save();
    }

    #[test]
    #[should_panic(expected = "entity was not set")]
    fn test_populate_without_entity_panics() {
        let mut controller: FormController<DepartmentFields> = FormController::new();
        controller.populate_from_entity();
    }
}
