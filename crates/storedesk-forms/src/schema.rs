//! Field schema: the declarative description of a form.
//!
//! A schema is an ordered `Vec<FieldDescriptor>`. Order is render order.
//! Descriptors carry no behavior; the controller reads them for validation
//! and the dispatch registry reads their [`FieldKind`] to pick a control.
//!
//! Descriptors deserialize from the JSON shape used by page configuration:
//!
//! ```json
//! { "key": "state", "name": "state", "label": "State", "type": "select",
//!   "required": true, "options": [{ "value": "CA", "text": "California" }] }
//! ```
//!
//! # Preconditions
//!
//! No two descriptors in one schema may share a `key`. This is a caller
//! error; [`assert_unique_keys`] checks it in debug builds only.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One `{value, text}` pair offered by a select field.
///
/// The `value` is what gets stored in the value bag; `text` is display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The stored value.
    pub value: String,
    /// The display text.
    #[serde(alias = "label", alias = "display")]
    pub text: String,
}

impl SelectOption {
    /// Creates a new option.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Entry-type hint for text inputs. Presentation only; validation ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// `type="email"`.
    Email,
    /// `type="password"`.
    Password,
    /// `type="tel"`.
    Tel,
    /// `type="number"`.
    Number,
    /// `type="url"`.
    Url,
    /// `type="date"`.
    Date,
    /// `type="text"`. Unrecognized hints also land here.
    #[default]
    #[serde(other)]
    Text,
}

impl InputType {
    /// Returns the HTML `type` attribute value.
    pub const fn as_html(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Url => "url",
            Self::Date => "date",
        }
    }
}

/// Selects which control renders a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text entry.
    TextInput {
        /// Entry-type hint.
        input_type: InputType,
    },
    /// Single choice over a text-filterable option list.
    Select {
        /// Options in display order.
        options: Vec<SelectOption>,
    },
    /// A kind tag this crate does not define. Rendered by a control
    /// registered for the tag, or as a text input when none is.
    Other(String),
}

impl FieldKind {
    /// Tag of the text input kind.
    pub const TEXT_INPUT: &'static str = "text-input";
    /// Tag of the select kind.
    pub const SELECT: &'static str = "select";

    /// Returns the kind's tag.
    pub fn tag(&self) -> &str {
        match self {
            Self::TextInput { .. } => Self::TEXT_INPUT,
            Self::Select { .. } => Self::SELECT,
            Self::Other(tag) => tag,
        }
    }

    /// Returns the option list for select kinds, empty otherwise.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Select { options } => options,
            _ => &[],
        }
    }

    /// Returns the entry-type hint, `Text` for non-text kinds.
    pub const fn input_type(&self) -> InputType {
        match self {
            Self::TextInput { input_type } => *input_type,
            _ => InputType::Text,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of a form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor", into = "RawDescriptor")]
pub struct FieldDescriptor {
    /// Identity of the field within the schema; used for render keying.
    pub key: String,
    /// Binding path into the value bag.
    pub name: String,
    /// Human-readable label.
    pub label: Option<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// The control kind and its payload.
    pub kind: FieldKind,
    /// Suppresses rendering; the field stays bound and validated.
    pub hidden: bool,
    /// The field must hold a non-blank value to submit.
    pub required: bool,
}

impl FieldDescriptor {
    /// Creates a descriptor whose `name` equals its `key`.
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            label: None,
            placeholder: None,
            kind,
            hidden: false,
            required: false,
        }
    }

    /// Creates a plain text input descriptor.
    pub fn text(key: impl Into<String>) -> Self {
        Self::new(
            key,
            FieldKind::TextInput {
                input_type: InputType::Text,
            },
        )
    }

    /// Creates a select descriptor over the given options.
    pub fn select(key: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(key, FieldKind::Select { options })
    }

    /// Sets the binding name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether the field is hidden.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Sets the entry-type hint. Has no effect on non-text kinds.
    #[must_use]
    pub fn input_type(mut self, input_type: InputType) -> Self {
        if let FieldKind::TextInput { input_type: current } = &mut self.kind {
            *current = input_type;
        }
        self
    }

    /// Returns the label, or the name when no label is set or it is blank.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

/// Returns the keys that occur more than once, in first-repeat order.
pub fn duplicate_keys(fields: &[FieldDescriptor]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for field in fields {
        if !seen.insert(field.key.as_str()) && !dups.contains(&field.key.as_str()) {
            dups.push(field.key.as_str());
        }
    }
    dups
}

/// Checks the unique-key precondition in debug builds.
///
/// # Panics
///
/// Panics in debug builds if two descriptors share a key.
pub fn assert_unique_keys(fields: &[FieldDescriptor]) {
    if cfg!(debug_assertions) {
        let dups = duplicate_keys(fields);
        assert!(dups.is_empty(), "duplicate field keys in form schema: {dups:?}");
    }
}

// ── Wire shape ───────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptor {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default)]
    hidden: bool,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_type: Option<InputType>,
}

impl From<RawDescriptor> for FieldDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        let kind = match raw.kind.as_deref() {
            None | Some("input" | FieldKind::TEXT_INPUT) => FieldKind::TextInput {
                input_type: raw.input_type.unwrap_or_default(),
            },
            Some(FieldKind::SELECT) => FieldKind::Select {
                options: raw.options.unwrap_or_default(),
            },
            Some(other) => FieldKind::Other(other.to_string()),
        };
        Self {
            name: raw.name.unwrap_or_else(|| raw.key.clone()),
            key: raw.key,
            label: raw.label,
            placeholder: raw.placeholder,
            kind,
            hidden: raw.hidden,
            required: raw.required,
        }
    }
}

impl From<FieldDescriptor> for RawDescriptor {
    fn from(field: FieldDescriptor) -> Self {
        let (options, input_type) = match &field.kind {
            FieldKind::TextInput { input_type } => (None, Some(*input_type)),
            FieldKind::Select { options } => (Some(options.clone()), None),
            FieldKind::Other(_) => (None, None),
        };
        Self {
            kind: Some(field.kind.tag().to_string()),
            key: field.key,
            name: Some(field.name),
            label: field.label,
            placeholder: field.placeholder,
            hidden: field.hidden,
            required: field.required,
            options,
            input_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let f = FieldDescriptor::text("email");
        assert_eq!(f.key, "email");
        assert_eq!(f.name, "email");
        assert!(!f.required);
        assert!(!f.hidden);
        assert_eq!(f.kind.tag(), "text-input");
        assert_eq!(f.display_label(), "email");
    }

    #[test]
    fn test_builder() {
        let f = FieldDescriptor::text("contact_email")
            .name("contact.email")
            .label("Email")
            .placeholder("you@example.com")
            .input_type(InputType::Email)
            .required(true);
        assert_eq!(f.name, "contact.email");
        assert_eq!(f.display_label(), "Email");
        assert_eq!(f.kind.input_type(), InputType::Email);
        assert!(f.required);
    }

    #[test]
    fn test_input_type_ignored_for_select() {
        let f = FieldDescriptor::select("state", vec![]).input_type(InputType::Email);
        assert_eq!(f.kind, FieldKind::Select { options: vec![] });
    }

    #[test]
    fn test_duplicate_keys() {
        let fields = vec![
            FieldDescriptor::text("a"),
            FieldDescriptor::text("b"),
            FieldDescriptor::text("a"),
            FieldDescriptor::text("a"),
        ];
        assert_eq!(duplicate_keys(&fields), vec!["a"]);
        assert!(duplicate_keys(&fields[..2]).is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate field keys")]
    fn test_assert_unique_keys_panics() {
        assert_unique_keys(&[FieldDescriptor::text("a"), FieldDescriptor::text("a")]);
    }

    #[test]
    fn test_deserialize_select() {
        let json = r#"{
            "key": "state", "label": "State", "type": "select", "required": true,
            "options": [{"value": "CA", "text": "California"}, {"value": "NY", "label": "New York"}]
        }"#;
        let f: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(f.name, "state");
        assert!(f.required);
        assert_eq!(f.kind.options().len(), 2);
        assert_eq!(f.kind.options()[1], SelectOption::new("NY", "New York"));
    }

    #[test]
    fn test_deserialize_input_aliases() {
        let f: FieldDescriptor =
            serde_json::from_str(r#"{"key": "e", "type": "input", "inputType": "email"}"#).unwrap();
        assert_eq!(
            f.kind,
            FieldKind::TextInput {
                input_type: InputType::Email
            }
        );

        let f: FieldDescriptor = serde_json::from_str(r#"{"key": "e"}"#).unwrap();
        assert_eq!(f.kind.tag(), "text-input");
    }

    #[test]
    fn test_deserialize_unknown_input_type() {
        let f: FieldDescriptor =
            serde_json::from_str(r#"{"key": "c", "inputType": "color"}"#).unwrap();
        assert_eq!(f.kind.input_type(), InputType::Text);
    }

    #[test]
    fn test_input_type_wire_names() {
        assert_eq!(serde_json::to_value(InputType::Text).unwrap(), "text");
        assert_eq!(serde_json::to_value(InputType::Tel).unwrap(), "tel");
        let parsed: InputType = serde_json::from_str(r#""date""#).unwrap();
        assert_eq!(parsed, InputType::Date);
        assert_eq!(InputType::default(), InputType::Text);
    }

    #[test]
    fn test_blank_label_falls_back_to_name() {
        let f = FieldDescriptor::text("zip").label("  ");
        assert_eq!(f.display_label(), "zip");
        let f: FieldDescriptor =
            serde_json::from_str(r#"{"key": "zip", "label": "", "required": true}"#).unwrap();
        assert_eq!(f.display_label(), "zip");
    }

    #[test]
    fn test_deserialize_other_kind() {
        let f: FieldDescriptor =
            serde_json::from_str(r#"{"key": "x", "type": "unknown-future-type"}"#).unwrap();
        assert_eq!(f.kind, FieldKind::Other("unknown-future-type".into()));
        assert_eq!(f.kind.to_string(), "unknown-future-type");
    }

    #[test]
    fn test_serialize_uses_type_tag() {
        let f = FieldDescriptor::select("s", vec![SelectOption::new("1", "One")]);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["options"][0]["value"], "1");
    }
}
