//! Field-level validation.
//!
//! The only built-in rule is `required`: the value must be non-empty after
//! trimming. Errors accumulate across all fields rather than short-circuiting,
//! so every problem is reported at once. Hidden fields are validated like
//! visible ones.

use crate::schema::FieldDescriptor;
use crate::values::{ValidationErrorSet, ValueBag};

/// Returns the message for a missing required value.
pub fn required_message(field: &FieldDescriptor) -> String {
    format!("{} is required", field.display_label())
}

/// Returns `true` if `value` counts as empty.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Validates one field's value, returning its messages (empty when valid).
pub fn validate_field(field: &FieldDescriptor, value: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    if field.required && is_blank(value) {
        errors.push(required_message(field));
    }
    errors
}

/// Validates a value against every descriptor bound to `name`.
///
/// Several descriptors may share one binding name; a message repeated by
/// more than one of them is reported once.
pub fn validate_name(fields: &[FieldDescriptor], name: &str, value: Option<&str>) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();
    for field in fields.iter().filter(|f| f.name == name) {
        for message in validate_field(field, value) {
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }
    messages
}

/// Validates every field against the bag.
pub fn validate_all(fields: &[FieldDescriptor], values: &ValueBag) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::new();
    let mut seen: Vec<&str> = Vec::new();
    for field in fields {
        let name = field.name.as_str();
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);
        for message in validate_name(fields, name, values.get(name)) {
            errors.add(name, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SelectOption;

    #[test]
    fn test_required_message_prefers_label() {
        let f = FieldDescriptor::text("zip").label("Zip code");
        assert_eq!(required_message(&f), "Zip code is required");
        let f = FieldDescriptor::text("zip");
        assert_eq!(required_message(&f), "zip is required");
    }

    #[test]
    fn test_required_message_ignores_blank_label() {
        let f = FieldDescriptor::text("zip").label("");
        assert_eq!(required_message(&f), "zip is required");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t")));
        assert!(!is_blank(Some(" x ")));
    }

    #[test]
    fn test_optional_field_never_errors() {
        let f = FieldDescriptor::text("phone");
        assert!(validate_field(&f, None).is_empty());
    }

    #[test]
    fn test_validate_all_accumulates() {
        let fields = vec![
            FieldDescriptor::text("email").required(true),
            FieldDescriptor::select("country", vec![SelectOption::new("US", "United States")])
                .required(true),
            FieldDescriptor::text("phone"),
        ];
        let errors = validate_all(&fields, &ValueBag::new());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), ["email is required".to_string()]);
        assert_eq!(errors.get("country"), ["country is required".to_string()]);
    }

    #[test]
    fn test_validate_all_hidden_required() {
        let fields = vec![FieldDescriptor::text("id").hidden(true).required(true)];
        let errors = validate_all(&fields, &ValueBag::new());
        assert!(errors.contains("id"));

        let bag: ValueBag = [("id", "3")].into_iter().collect();
        assert!(validate_all(&fields, &bag).is_empty());
    }

    #[test]
    fn test_validate_name_checks_every_descriptor_sharing_it() {
        let fields = vec![
            FieldDescriptor::text("a").name("x"),
            FieldDescriptor::text("b").name("x").label("X").required(true),
        ];
        assert_eq!(validate_name(&fields, "x", Some("")), vec!["X is required".to_string()]);
        assert!(validate_name(&fields, "x", Some("v")).is_empty());

        let errors = validate_all(&fields, &ValueBag::new());
        assert_eq!(errors.get("x"), ["X is required".to_string()]);
    }

    #[test]
    fn test_validate_all_reports_shared_message_once() {
        let fields = vec![
            FieldDescriptor::text("a").name("x").required(true),
            FieldDescriptor::text("b").name("x").required(true),
        ];
        let errors = validate_all(&fields, &ValueBag::new());
        assert_eq!(errors.get("x"), ["x is required".to_string()]);
    }

    #[test]
    fn test_validate_all_keys_by_name_not_key() {
        let fields = vec![FieldDescriptor::text("k").name("contact.email").required(true)];
        let errors = validate_all(&fields, &ValueBag::new());
        assert!(errors.contains("contact.email"));
        assert!(!errors.contains("k"));
    }
}
