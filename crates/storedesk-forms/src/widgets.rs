//! Interactive controls.
//!
//! A [`Control`] knows how to render one field as HTML and how to turn a
//! [`ControlEvent`] into writes on the field's [`FieldBinding`]. Controls are
//! stateless; per-field interaction state (focus, picker query, highlighted
//! option) lives in a [`ControlState`] owned by the form and keyed by the
//! field's `key`.
//!
//! Two controls are built in:
//!
//! - [`TextInput`]: every keystroke is written straight to the bag.
//! - [`SearchSelect`]: a single-choice picker whose option list is filtered
//!   by a typed query. Matching folds case and diacritics, so "e" finds "é".
//!   Choosing an option stores its `value`, never its display text.

use std::collections::HashMap;
use std::fmt;

use storedesk_core::utils::text::{escape_html, folded_contains};

use crate::controller::FieldBinding;
use crate::schema::{FieldDescriptor, SelectOption};

/// Enumerates the built-in control types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlType {
    /// Free-text `<input>`.
    TextInput,
    /// Searchable single-choice picker.
    SearchSelect,
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::SearchSelect => "SearchSelect",
        };
        write!(f, "{name}")
    }
}

/// A user interaction delivered to one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The control gained focus.
    Focus,
    /// The control lost focus.
    Blur,
    /// The text of an input changed to this full value.
    Input(String),
    /// The search query of a picker changed.
    Filter(String),
    /// Move the picker highlight by this many rows.
    MoveHighlight(isize),
    /// Choose the highlighted option.
    ConfirmHighlighted,
    /// Choose the option with this value.
    Choose(String),
}

/// Interaction state of one rendered control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    /// The control has focus.
    pub focused: bool,
    /// The picker menu is open.
    pub open: bool,
    /// The picker search query.
    pub query: String,
    /// Index of the highlighted row among the filtered options.
    pub highlighted: usize,
}

/// Renders a field and applies interactions to its binding.
pub trait Control: fmt::Debug {
    /// Returns the control type.
    fn control_type(&self) -> ControlType;

    /// Renders the control markup (without label or error list).
    ///
    /// # Arguments
    /// - `field` - the descriptor being rendered
    /// - `value` - the field's current value
    /// - `state` - the control's interaction state
    /// - `attrs` - additional HTML attributes for the main element
    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&str>,
        state: &ControlState,
        attrs: &HashMap<String, String>,
    ) -> String;

    /// Applies one interaction.
    fn handle(&self, event: ControlEvent, binding: &mut FieldBinding<'_>, state: &mut ControlState);

    /// Returns the HTML `id` a `<label>` should target.
    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// Formats an HTML attributes map into a string like ` key="value" key2="value2"`.
pub(crate) fn render_attrs(attrs: &HashMap<String, String>) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut parts: Vec<String> = attrs
        .iter()
        .map(|(k, v)| {
            if v.is_empty() {
                format!(" {k}")
            } else {
                format!(r#" {k}="{}""#, escape_html(v))
            }
        })
        .collect();
    parts.sort(); // deterministic output for testing
    parts.join("")
}

// ---------------------------------------------------------------------------
// Text input
// ---------------------------------------------------------------------------

/// A free-text `<input>` bound directly to the bag.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput;

impl Control for TextInput {
    fn control_type(&self) -> ControlType {
        ControlType::TextInput
    }

    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&str>,
        _state: &ControlState,
        attrs: &HashMap<String, String>,
    ) -> String {
        let mut attrs = attrs.clone();
        if let Some(placeholder) = &field.placeholder {
            attrs.insert("placeholder".to_string(), placeholder.clone());
        }
        if field.required {
            attrs.insert("required".to_string(), String::new());
        }
        format!(
            r#"<input type="{}" name="{}" value="{}"{} />"#,
            field.kind.input_type().as_html(),
            escape_html(&field.name),
            escape_html(value.unwrap_or("")),
            render_attrs(&attrs)
        )
    }

    fn handle(&self, event: ControlEvent, binding: &mut FieldBinding<'_>, state: &mut ControlState) {
        match event {
            ControlEvent::Focus => state.focused = true,
            ControlEvent::Blur => {
                state.focused = false;
                binding.mark_touched();
            }
            ControlEvent::Input(text) => binding.set_value(text),
            other => {
                tracing::debug!(field = %binding.name(), event = ?other, "event ignored by text input");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Searchable select
// ---------------------------------------------------------------------------

/// Returns the options whose display text matches `query`.
///
/// Matching ignores case and diacritics. An empty query matches everything.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    options
        .iter()
        .filter(|opt| folded_contains(&opt.text, query))
        .collect()
}

/// Returns the option whose value equals `value`.
pub fn selected_option<'a>(
    options: &'a [SelectOption],
    value: Option<&str>,
) -> Option<&'a SelectOption> {
    let value = value?;
    options.iter().find(|opt| opt.value == value)
}

/// A single-choice, text-filterable picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchSelect;

impl SearchSelect {
    fn commit(option: &SelectOption, binding: &mut FieldBinding<'_>, state: &mut ControlState) {
        binding.set_value(option.value.clone());
        state.query.clear();
        state.open = false;
        state.highlighted = 0;
    }
}

impl Control for SearchSelect {
    fn control_type(&self) -> ControlType {
        ControlType::SearchSelect
    }

    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&str>,
        state: &ControlState,
        attrs: &HashMap<String, String>,
    ) -> String {
        let options = field.kind.options();
        let selected = selected_option(options, value);
        let name = escape_html(&field.name);

        let mut classes = String::from("ui fluid search selection dropdown");
        if state.open {
            classes.push_str(" active visible");
        }
        let mut attrs = attrs.clone();
        let search_id = attrs
            .remove("id")
            .map(|id| format!(r#" id="{}""#, escape_html(&self.id_for_label(&id))))
            .unwrap_or_default();
        if field.required {
            attrs.insert("aria-required".to_string(), "true".to_string());
        }

        let text = match selected {
            Some(opt) => format!(r#"<div class="text">{}</div>"#, escape_html(&opt.text)),
            None => {
                let placeholder = field.placeholder.as_deref().unwrap_or("");
                format!(r#"<div class="default text">{}</div>"#, escape_html(placeholder))
            }
        };

        let mut items = String::new();
        for (i, opt) in filter_options(options, &state.query).into_iter().enumerate() {
            let mut item_class = String::from("item");
            if selected.is_some_and(|s| s.value == opt.value) {
                item_class.push_str(" selected");
            }
            if state.open && i == state.highlighted {
                item_class.push_str(" active");
            }
            items.push_str(&format!(
                r#"<div class="{item_class}" data-value="{}">{}</div>"#,
                escape_html(&opt.value),
                escape_html(&opt.text)
            ));
        }
        if items.is_empty() {
            items.push_str(r#"<div class="message">No results found.</div>"#);
        }

        format!(
            concat!(
                r#"<div class="{classes}" role="combobox"{attrs}>"#,
                r#"<input type="hidden" name="{name}" value="{value}" />"#,
                r#"<input class="search" autocomplete="off"{search_id} value="{query}" />"#,
                r#"{text}<div class="menu">{items}</div></div>"#
            ),
            classes = classes,
            attrs = render_attrs(&attrs),
            name = name,
            value = escape_html(value.unwrap_or("")),
            search_id = search_id,
            query = escape_html(&state.query),
            text = text,
            items = items,
        )
    }

    fn handle(&self, event: ControlEvent, binding: &mut FieldBinding<'_>, state: &mut ControlState) {
        match event {
            ControlEvent::Focus => {
                state.focused = true;
                state.open = true;
                state.highlighted = 0;
            }
            ControlEvent::Blur => {
                state.focused = false;
                state.open = false;
                state.query.clear();
                binding.mark_touched();
            }
            ControlEvent::Filter(query) | ControlEvent::Input(query) => {
                state.query = query;
                state.open = true;
                state.highlighted = 0;
            }
            ControlEvent::MoveHighlight(delta) => {
                let options = binding.field().kind.options();
                let count = filter_options(options, &state.query).len();
                if count > 0 {
                    let max = count - 1;
                    state.highlighted = state.highlighted.saturating_add_signed(delta).min(max);
                }
            }
            ControlEvent::ConfirmHighlighted => {
                let options = binding.field().kind.options().to_vec();
                let filtered = filter_options(&options, &state.query);
                match filtered.get(state.highlighted) {
                    Some(opt) => Self::commit(opt, binding, state),
                    None => {
                        tracing::debug!(field = %binding.name(), query = %state.query, "no option to confirm");
                    }
                }
            }
            ControlEvent::Choose(value) => {
                let option = binding
                    .field()
                    .kind
                    .options()
                    .iter()
                    .find(|opt| opt.value == value)
                    .cloned();
                match option {
                    Some(opt) => Self::commit(&opt, binding, state),
                    None => {
                        tracing::warn!(field = %binding.name(), value = %value, "choice is not one of the field's options");
                    }
                }
            }
        }
    }

    fn id_for_label(&self, id: &str) -> String {
        format!("{id}_search")
    }
}
