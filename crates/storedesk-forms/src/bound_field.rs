//! Bound fields: descriptors paired with their current state.
//!
//! A [`BoundField`] combines a [`FieldDescriptor`] with its current value,
//! the messages it should display, the [`Control`] that renders it, and that
//! control's interaction state. It is what a form produces per visible
//! field when rendering.

use std::collections::HashMap;

use storedesk_core::utils::text::escape_html;

use crate::schema::FieldDescriptor;
use crate::widgets::{Control, ControlState};

/// A field bound to its value, errors, and control.
#[derive(Debug)]
pub struct BoundField<'a> {
    /// The descriptor.
    pub field: &'a FieldDescriptor,
    /// The current value from the bag.
    pub value: Option<&'a str>,
    /// Messages to display.
    pub errors: Vec<String>,
    /// The control chosen for the field's kind.
    pub control: &'a dyn Control,
    /// The control's interaction state.
    pub state: &'a ControlState,
}

impl<'a> BoundField<'a> {
    /// Creates a new bound field.
    pub fn new(
        field: &'a FieldDescriptor,
        value: Option<&'a str>,
        errors: Vec<String>,
        control: &'a dyn Control,
        state: &'a ControlState,
    ) -> Self {
        Self {
            field,
            value,
            errors,
            control,
            state,
        }
    }

    /// Returns the auto-generated HTML `id` for this field.
    pub fn auto_id(&self) -> String {
        format!("id_{}", self.field.name)
    }

    /// Renders the control markup.
    pub fn render(&self, extra_attrs: &HashMap<String, String>) -> String {
        let mut attrs = extra_attrs.clone();
        attrs.entry("id".to_string()).or_insert_with(|| self.auto_id());
        self.control.render(self.field, self.value, self.state, &attrs)
    }

    /// Renders a `<label>` element targeting the control.
    pub fn label_tag(&self) -> String {
        let label_id = self.control.id_for_label(&self.auto_id());
        format!(
            r#"<label for="{}">{}</label>"#,
            escape_html(&label_id),
            escape_html(self.field.display_label())
        )
    }

    /// Returns `true` if this field has any errors to display.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders the error list as an HTML `<ul>` element.
    pub fn errors_as_ul(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        let items: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape_html(e)))
            .collect();
        format!(r#"<ul class="errorlist">{}</ul>"#, items.join(""))
    }

    /// Renders the whole field row: label, control, and errors.
    pub fn as_div(&self) -> String {
        let mut class = String::from("field");
        if self.field.required {
            class.push_str(" required");
        }
        if self.has_errors() {
            class.push_str(" error");
        }
        format!(
            r#"<div class="{class}" data-key="{}">{}{}{}</div>"#,
            escape_html(&self.field.key),
            self.label_tag(),
            self.render(&HashMap::new()),
            self.errors_as_ul()
        )
    }
}
