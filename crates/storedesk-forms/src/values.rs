//! Value and error containers owned by a form.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use storedesk_core::ValidationError;

/// Current field values keyed by binding name.
///
/// A name that has never been seeded or set is absent (undefined), which
/// validation treats the same as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueBag(BTreeMap<String, String>);

impl ValueBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `name`, if defined.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Sets the value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns `true` if `name` has a defined value.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of defined values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no value is defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts the bag into a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ValueBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Validation messages keyed by binding name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrorSet(BTreeMap<String, Vec<String>>);

impl ValidationErrorSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for `name`.
    pub fn add(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(message.into());
    }

    /// Returns the messages for `name`, empty if none.
    pub fn get(&self, name: &str) -> &[String] {
        self.0.get(name).map_or(&[], Vec::as_slice)
    }

    /// Removes every message for `name`. Returns `true` if any were removed.
    pub fn clear_field(&mut self, name: &str) -> bool {
        self.0.remove(name).is_some()
    }

    /// Returns `true` if `name` has at least one message.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of fields with messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, messages)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<ValidationErrorSet> for ValidationError {
    fn from(errors: ValidationErrorSet) -> Self {
        Self::new(errors.0)
    }
}

/// One or several messages for a field in an external error overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessages {
    /// A single message.
    One(String),
    /// A list of messages.
    Many(Vec<String>),
}

impl ErrorMessages {
    /// Returns the messages as a list.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(msg) => vec![msg.clone()],
            Self::Many(msgs) => msgs.clone(),
        }
    }
}

impl From<&str> for ErrorMessages {
    fn from(msg: &str) -> Self {
        Self::One(msg.to_string())
    }
}

impl From<String> for ErrorMessages {
    fn from(msg: String) -> Self {
        Self::One(msg)
    }
}

impl From<Vec<String>> for ErrorMessages {
    fn from(msgs: Vec<String>) -> Self {
        Self::Many(msgs)
    }
}

/// Caller-supplied per-field errors (e.g. a server-side rejection).
///
/// Merged into the displayed errors; for a field present here, these
/// messages are shown instead of the engine's own.
pub type ErrorOverlay = HashMap<String, ErrorMessages>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bag_basics() {
        let mut bag = ValueBag::new();
        assert!(bag.is_empty());
        bag.insert("email", "a@b.com");
        assert_eq!(bag.get("email"), Some("a@b.com"));
        assert!(bag.contains("email"));
        assert!(!bag.contains("phone"));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_value_bag_from_iter_and_json() {
        let bag: ValueBag = [("b", "2"), ("a", "1")].into_iter().collect();
        let names: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(bag.to_json(), serde_json::json!({"a": "1", "b": "2"}));
    }

    #[test]
    fn test_value_bag_serde_is_a_plain_map() {
        let bag: ValueBag = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(bag.get("id"), Some("7"));
    }

    #[test]
    fn test_error_set() {
        let mut errors = ValidationErrorSet::new();
        errors.add("email", "email is required");
        errors.add("email", "second");
        assert_eq!(errors.get("email").len(), 2);
        assert!(errors.get("phone").is_empty());
        assert!(errors.clear_field("email"));
        assert!(!errors.clear_field("email"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_set_into_validation_error() {
        let mut errors = ValidationErrorSet::new();
        errors.add("name", "name is required");
        let err: ValidationError = errors.into();
        assert_eq!(err.to_string(), "name: name is required");
    }

    #[test]
    fn test_error_messages_untagged() {
        let overlay: ErrorOverlay =
            serde_json::from_str(r#"{"email": "taken", "zip": ["bad", "short"]}"#).unwrap();
        assert_eq!(overlay["email"].to_vec(), vec!["taken"]);
        assert_eq!(overlay["zip"].to_vec(), vec!["bad", "short"]);
    }
}
