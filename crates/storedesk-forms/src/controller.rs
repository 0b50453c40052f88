//! The form state controller.
//!
//! [`FormController`] exclusively owns a form's [`ValueBag`], its touched set,
//! and its [`ValidationErrorSet`]. Nothing else mutates them: controls write
//! through a [`FieldBinding`] obtained from [`FormController::bind_field`],
//! and validation runs only inside [`FormController::submit`] and when a
//! bound value changes.
//!
//! Error display follows two modes. Before the first submission attempt, a
//! field shows its required error only once it has been touched. After a
//! submission attempt, every change re-validates the changed field, so a
//! fixed field loses its error immediately and a re-emptied one regains it.

use std::collections::HashSet;

use crate::schema::{assert_unique_keys, FieldDescriptor};
use crate::validation::{validate_all, validate_name};
use crate::values::{ValidationErrorSet, ValueBag};

/// Result of a submission attempt.
///
/// An invalid submission is an expected outcome, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the handler received this snapshot.
    Submitted(ValueBag),
    /// Validation failed; the handler was not called.
    Invalid(ValidationErrorSet),
}

impl SubmitOutcome {
    /// Returns `true` for [`SubmitOutcome::Submitted`].
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Owns the value, touched, and error state of one form instance.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    fields: Vec<FieldDescriptor>,
    values: ValueBag,
    touched: HashSet<String>,
    errors: ValidationErrorSet,
    submit_count: usize,
}

impl FormController {
    /// Creates a controller over the given schema with an empty bag.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if two descriptors share a key.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        assert_unique_keys(&fields);
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Seeds the bag from `defaults` and resets touched and error state.
    ///
    /// Intended to run once at mount. Calling it again discards everything
    /// the user has entered.
    pub fn initialize(&mut self, defaults: ValueBag) {
        tracing::debug!(defaults = defaults.len(), "initializing form state");
        self.values = defaults;
        self.touched.clear();
        self.errors = ValidationErrorSet::new();
        self.submit_count = 0;
    }

    /// Replaces the schema, keeping state for names that remain.
    ///
    /// Values are never dropped. Touched and error state for names no longer
    /// in the schema is discarded.
    pub fn replace_fields(&mut self, fields: Vec<FieldDescriptor>) {
        assert_unique_keys(&fields);
        self.fields = fields;
        let names: HashSet<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        self.touched.retain(|name| names.contains(name.as_str()));
        let stale: Vec<String> = self
            .errors
            .iter()
            .filter(|(name, _)| !names.contains(name))
            .map(|(name, _)| name.to_string())
            .collect();
        for name in stale {
            self.errors.clear_field(&name);
        }
    }

    /// Returns the schema.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the first descriptor bound to `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns a binding for the field named `name`.
    ///
    /// # Panics
    ///
    /// Panics if no descriptor in the schema has this name. Binding an
    /// unknown field is a programming error.
    pub fn bind_field(&mut self, name: &str) -> FieldBinding<'_> {
        let index = self.fields.iter().position(|f| f.name == name);
        assert!(
            index.is_some(),
            "bind_field: no field named `{name}` in form schema"
        );
        FieldBinding {
            index: index.unwrap_or_default(),
            controller: self,
        }
    }

    /// Returns a binding for the descriptor at `index` in the schema.
    ///
    /// Used when the caller already resolved a descriptor by key, so two
    /// keys sharing a binding name each reach their own descriptor.
    pub(crate) fn bind_index(&mut self, index: usize) -> FieldBinding<'_> {
        debug_assert!(index < self.fields.len(), "bind_index: {index} out of range");
        FieldBinding {
            index,
            controller: self,
        }
    }

    /// Returns the whole bag.
    pub const fn values(&self) -> &ValueBag {
        &self.values
    }

    /// Returns the current value for `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Returns the errors recorded by submission and re-validation.
    pub const fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    /// Returns `true` if the user has interacted with `name`.
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Returns how many times `submit` has been called since initialization.
    pub const fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Returns the messages a control for `name` should currently display.
    ///
    /// Recorded errors always show. A touched field with no recorded error is
    /// validated on the spot so required errors appear before submission.
    pub fn visible_errors(&self, name: &str) -> Vec<String> {
        if self.errors.contains(name) {
            return self.errors.get(name).to_vec();
        }
        if !self.is_touched(name) {
            return Vec::new();
        }
        validate_name(&self.fields, name, self.values.get(name))
    }

    /// Validates every field and, if all pass, calls `on_valid` once.
    ///
    /// `on_valid` receives an owned snapshot; changes made to it afterwards do
    /// not reach the controller. On failure the error set is replaced and the
    /// handler is not called. Values are never cleared.
    pub fn submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(ValueBag),
    {
        self.submit_count += 1;
        self.errors = validate_all(&self.fields, &self.values);

        if self.errors.is_empty() {
            tracing::info!(fields = self.values.len(), "form submitted");
            let snapshot = self.values.clone();
            on_valid(snapshot.clone());
            SubmitOutcome::Submitted(snapshot)
        } else {
            tracing::info!(invalid = self.errors.len(), "form submission rejected");
            SubmitOutcome::Invalid(self.errors.clone())
        }
    }

    fn set_value_at(&mut self, index: usize, value: String) {
        let name = self.fields[index].name.clone();
        tracing::debug!(field = %name, len = value.len(), "field value changed");

        let messages = validate_name(&self.fields, &name, Some(&value));
        self.values.insert(name.clone(), value);

        if messages.is_empty() {
            self.errors.clear_field(&name);
        } else if self.submit_count > 0 {
            self.errors.clear_field(&name);
            for message in messages {
                self.errors.add(name.clone(), message);
            }
        }
    }

    fn mark_touched_at(&mut self, index: usize) {
        let name = &self.fields[index].name;
        if self.touched.insert(name.clone()) {
            tracing::debug!(field = %name, "field touched");
        }
    }
}

/// Read/write access to one field of a [`FormController`].
///
/// A binding only ever touches its own field.
#[derive(Debug)]
pub struct FieldBinding<'a> {
    controller: &'a mut FormController,
    index: usize,
}

impl FieldBinding<'_> {
    /// Returns the bound descriptor.
    pub fn field(&self) -> &FieldDescriptor {
        &self.controller.fields[self.index]
    }

    /// Returns the binding name.
    pub fn name(&self) -> &str {
        &self.field().name
    }

    /// Returns the field's current value.
    pub fn current_value(&self) -> Option<&str> {
        self.controller.values.get(self.name())
    }

    /// Writes the field's value. This is the only way to change it.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.controller.set_value_at(self.index, value.into());
    }

    /// Records that the user has interacted with the field.
    pub fn mark_touched(&mut self) {
        self.controller.mark_touched_at(self.index);
    }

    /// Returns `true` if the field has been touched.
    pub fn is_touched(&self) -> bool {
        self.controller.is_touched(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SelectOption;

    fn schema() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("email").required(true),
            FieldDescriptor::select("country", vec![SelectOption::new("US", "United States")])
                .required(true),
            FieldDescriptor::text("id").hidden(true),
        ]
    }

    fn defaults(pairs: &[(&str, &str)]) -> ValueBag {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_initialize_seeds_values() {
        let mut c = FormController::new(schema());
        c.initialize(defaults(&[("id", "42")]));
        assert_eq!(c.value("id"), Some("42"));
        assert_eq!(c.value("email"), None);
    }

    #[test]
    fn test_initialize_resets_state() {
        let mut c = FormController::new(schema());
        c.bind_field("email").set_value("x@y.z");
        c.bind_field("email").mark_touched();
        let _ = c.submit(|_| {});
        c.initialize(ValueBag::new());
        assert_eq!(c.value("email"), None);
        assert!(!c.is_touched("email"));
        assert!(c.errors().is_empty());
        assert_eq!(c.submit_count(), 0);
    }

    #[test]
    fn test_binding_reads_and_writes_one_field() {
        let mut c = FormController::new(schema());
        let mut email = c.bind_field("email");
        assert_eq!(email.current_value(), None);
        email.set_value("a@b.com");
        assert_eq!(email.current_value(), Some("a@b.com"));
        assert!(!email.is_touched());
        email.mark_touched();
        assert!(email.is_touched());
        assert_eq!(c.value("country"), None);
    }

    #[test]
    #[should_panic(expected = "no field named `nope`")]
    fn test_bind_unknown_field_panics() {
        let mut c = FormController::new(schema());
        let _ = c.bind_field("nope");
    }

    #[test]
    fn test_submit_invalid_does_not_call_handler() {
        let mut c = FormController::new(schema());
        let mut called = false;
        let outcome = c.submit(|_| called = true);
        assert!(!called);
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors.get("email"), ["email is required".to_string()]);
                assert_eq!(errors.get("country"), ["country is required".to_string()]);
            }
            SubmitOutcome::Submitted(_) => panic!("expected invalid outcome"),
        }
    }

    #[test]
    fn test_submit_valid_calls_handler_once_with_snapshot() {
        let mut c = FormController::new(schema());
        c.initialize(defaults(&[("id", "42")]));
        c.bind_field("email").set_value("a@b.com");
        c.bind_field("country").set_value("US");

        let mut calls = Vec::new();
        let outcome = c.submit(|mut bag| {
            calls.push(bag.clone());
            bag.insert("email", "mutated@after.submit");
        });
        assert!(outcome.is_submitted());
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("id"), Some("42"));
        assert_eq!(c.value("email"), Some("a@b.com"));
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut c = FormController::new(schema());
        c.bind_field("email").set_value("   ");
        c.bind_field("country").set_value("US");
        assert!(!c.submit(|_| {}).is_submitted());
    }

    #[test]
    fn test_error_cleared_when_field_becomes_valid() {
        let mut c = FormController::new(schema());
        let _ = c.submit(|_| {});
        assert!(c.errors().contains("email"));
        c.bind_field("email").set_value("a@b.com");
        assert!(!c.errors().contains("email"));
        assert!(c.errors().contains("country"));
    }

    #[test]
    fn test_revalidates_after_submit_attempt() {
        let mut c = FormController::new(schema());
        let _ = c.submit(|_| {});
        c.bind_field("email").set_value("a@b.com");
        c.bind_field("email").set_value("");
        assert_eq!(c.errors().get("email"), ["email is required".to_string()]);
    }

    #[test]
    fn test_no_errors_recorded_before_first_submit() {
        let mut c = FormController::new(schema());
        c.bind_field("email").set_value("");
        assert!(c.errors().is_empty());
    }

    #[test]
    fn test_visible_errors_eager_when_touched() {
        let mut c = FormController::new(schema());
        assert!(c.visible_errors("email").is_empty());
        c.bind_field("email").mark_touched();
        assert_eq!(c.visible_errors("email"), vec!["email is required".to_string()]);
        c.bind_field("email").set_value("a@b.com");
        assert!(c.visible_errors("email").is_empty());
    }

    #[test]
    fn test_visible_errors_after_submit_without_touch() {
        let mut c = FormController::new(schema());
        let _ = c.submit(|_| {});
        assert_eq!(c.visible_errors("country"), vec!["country is required".to_string()]);
    }

    #[test]
    fn test_replace_fields_keeps_state_for_remaining_names() {
        let mut c = FormController::new(schema());
        c.bind_field("email").set_value("a@b.com");
        c.bind_field("email").mark_touched();
        c.bind_field("country").mark_touched();

        let mut reordered = schema();
        reordered.swap(0, 2);
        reordered.retain(|f| f.name != "country");
        c.replace_fields(reordered);

        assert_eq!(c.value("email"), Some("a@b.com"));
        assert!(c.is_touched("email"));
        assert!(!c.is_touched("country"));
    }

    #[test]
    fn test_shared_name_keeps_required_error_from_any_descriptor() {
        let mut c = FormController::new(vec![
            FieldDescriptor::text("a").name("x"),
            FieldDescriptor::text("b").name("x").label("X").required(true),
        ]);
        let _ = c.submit(|_| {});
        assert_eq!(c.errors().get("x"), ["X is required".to_string()]);

        c.bind_index(1).set_value("");
        assert_eq!(c.errors().get("x"), ["X is required".to_string()]);
        c.bind_field("x").set_value("");
        assert_eq!(c.errors().get("x"), ["X is required".to_string()]);

        c.bind_index(0).set_value("filled");
        assert!(c.errors().is_empty());
    }

    #[test]
    fn test_shared_name_visible_errors_when_touched() {
        let mut c = FormController::new(vec![
            FieldDescriptor::text("a").name("x"),
            FieldDescriptor::text("b").name("x").label("X").required(true),
        ]);
        c.bind_field("x").mark_touched();
        assert_eq!(c.visible_errors("x"), vec!["X is required".to_string()]);
    }

    #[test]
    fn test_bind_index_reaches_its_own_descriptor() {
        let mut c = FormController::new(vec![
            FieldDescriptor::text("a").name("x"),
            FieldDescriptor::text("b").name("x").label("X"),
        ]);
        assert_eq!(c.bind_index(1).field().key, "b");
        assert_eq!(c.bind_field("x").field().key, "a");
    }

    #[test]
    fn test_empty_schema_submits_defaults() {
        let mut c = FormController::new(Vec::new());
        c.initialize(defaults(&[("extra", "kept")]));
        match c.submit(|_| {}) {
            SubmitOutcome::Submitted(bag) => assert_eq!(bag.get("extra"), Some("kept")),
            SubmitOutcome::Invalid(_) => panic!("empty schema must validate"),
        }
    }
}
