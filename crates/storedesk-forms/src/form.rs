//! The dynamic form.
//!
//! [`DynamicForm`] is what callers construct. It owns a [`FormController`],
//! a [`RendererRegistry`], and the per-key interaction state of every
//! control. The host feeds it [`FormEvent`]s and asks it to [`render`].
//!
//! Interaction state is keyed by the descriptor's `key`, never by position,
//! so reordering the schema through [`DynamicForm::set_fields`] keeps each
//! control's query, highlight, and focus attached to the right field.
//!
//! [`render`]: DynamicForm::render

use std::collections::{HashMap, HashSet};

use storedesk_core::utils::text::escape_html;

use crate::bound_field::BoundField;
use crate::controller::{FieldBinding, FormController, SubmitOutcome};
use crate::dispatch::RendererRegistry;
use crate::schema::FieldDescriptor;
use crate::values::{ErrorOverlay, ValueBag};
use crate::widgets::{ControlEvent, ControlState, ControlType};

/// Label of the submit control when none is configured.
pub const DEFAULT_CONFIRM_LABEL: &str = "Submit";

/// Callback receiving the bag of a valid submission.
pub type SubmitHandler = Box<dyn FnMut(ValueBag)>;

/// An event from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// An interaction with the control of the field identified by `key`.
    Field {
        /// The descriptor key.
        key: String,
        /// The interaction.
        event: ControlEvent,
    },
    /// The submit control was activated.
    Submit,
}

impl FormEvent {
    /// Shorthand for a [`FormEvent::Field`] event.
    pub fn field(key: impl Into<String>, event: ControlEvent) -> Self {
        Self::Field {
            key: key.into(),
            event,
        }
    }
}

/// One rendered, visible field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedControl {
    /// The descriptor key.
    pub key: String,
    /// The binding name.
    pub name: String,
    /// Which control rendered it.
    pub control_type: ControlType,
    /// The field row markup.
    pub html: String,
    /// The messages displayed with it.
    pub errors: Vec<String>,
}

/// The trailing submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    /// Button text.
    pub label: String,
    /// Rendered disabled while the caller reports loading.
    pub disabled: bool,
}

impl SubmitButton {
    /// Renders the button markup.
    pub fn to_html(&self) -> String {
        if self.disabled {
            format!(
                r#"<button type="submit" class="ui primary loading button" disabled>{}</button>"#,
                escape_html(&self.label)
            )
        } else {
            format!(
                r#"<button type="submit" class="ui primary button">{}</button>"#,
                escape_html(&self.label)
            )
        }
    }
}

/// The output of [`DynamicForm::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    /// Visible fields in schema order.
    pub controls: Vec<RenderedControl>,
    /// The submit control, always present.
    pub submit: SubmitButton,
}

impl RenderedForm {
    /// Returns the control rendered for `key`.
    pub fn control(&self, key: &str) -> Option<&RenderedControl> {
        self.controls.iter().find(|c| c.key == key)
    }

    /// Returns the keys of the rendered controls in order.
    pub fn keys(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.key.as_str()).collect()
    }

    /// Renders the whole form.
    pub fn to_html(&self) -> String {
        let body: String = self.controls.iter().map(|c| c.html.as_str()).collect();
        format!(
            r#"<form class="ui form">{body}{}</form>"#,
            self.submit.to_html()
        )
    }
}

/// A form rendered from a runtime schema.
pub struct DynamicForm {
    controller: FormController,
    registry: RendererRegistry,
    ui_state: HashMap<String, ControlState>,
    on_submit: Option<SubmitHandler>,
    loading: bool,
    confirm_button_label: String,
    external_errors: ErrorOverlay,
}

impl std::fmt::Debug for DynamicForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicForm")
            .field("controller", &self.controller)
            .field("ui_state", &self.ui_state)
            .field("has_handler", &self.on_submit.is_some())
            .field("loading", &self.loading)
            .field("confirm_button_label", &self.confirm_button_label)
            .field("external_errors", &self.external_errors)
            .finish_non_exhaustive()
    }
}

impl DynamicForm {
    /// Creates a form over `fields` with an empty bag.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if two descriptors share a key.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            controller: FormController::new(fields),
            registry: RendererRegistry::builtin(),
            ui_state: HashMap::new(),
            on_submit: None,
            loading: false,
            confirm_button_label: DEFAULT_CONFIRM_LABEL.to_string(),
            external_errors: ErrorOverlay::new(),
        }
    }

    /// Seeds the bag.
    #[must_use]
    pub fn default_values(mut self, defaults: ValueBag) -> Self {
        self.controller.initialize(defaults);
        self
    }

    /// Sets the handler called with the bag of each valid submission.
    #[must_use]
    pub fn on_submit(mut self, handler: impl FnMut(ValueBag) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    /// Sets the loading flag.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sets the submit control's label.
    #[must_use]
    pub fn confirm_button_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_button_label = label.into();
        self
    }

    /// Sets the external error overlay.
    #[must_use]
    pub fn errors(mut self, overlay: ErrorOverlay) -> Self {
        self.external_errors = overlay;
        self
    }

    /// Replaces the control registry.
    #[must_use]
    pub fn registry(mut self, registry: RendererRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Updates the loading flag after construction.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replaces the external error overlay after construction.
    pub fn set_errors(&mut self, overlay: ErrorOverlay) {
        self.external_errors = overlay;
    }

    /// Replaces the schema.
    ///
    /// Values and per-key interaction state survive for keys that remain.
    pub fn set_fields(&mut self, fields: Vec<FieldDescriptor>) {
        self.controller.replace_fields(fields);
        let keys: HashSet<&str> = self.controller.fields().iter().map(|f| f.key.as_str()).collect();
        self.ui_state.retain(|key, _| keys.contains(key.as_str()));
    }

    /// Returns the controller.
    pub const fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Returns a binding for the field named `name`.
    ///
    /// # Panics
    ///
    /// Panics if no descriptor has this name.
    pub fn bind_field(&mut self, name: &str) -> FieldBinding<'_> {
        self.controller.bind_field(name)
    }

    /// Returns the current bag.
    pub const fn values(&self) -> &ValueBag {
        self.controller.values()
    }

    /// Returns the interaction state of the control for `key`, if any.
    pub fn control_state(&self, key: &str) -> Option<&ControlState> {
        self.ui_state.get(key)
    }

    /// Returns `true` while the caller reports a submission in flight.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the messages displayed for the field named `name`.
    ///
    /// External messages for a name replace the engine's own.
    pub fn displayed_errors(&self, name: &str) -> Vec<String> {
        match self.external_errors.get(name) {
            Some(messages) => messages.to_vec(),
            None => self.controller.visible_errors(name),
        }
    }

    /// Applies one host event.
    ///
    /// Returns the outcome when the event was a submission.
    pub fn handle_event(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Submit => Some(self.submit()),
            FormEvent::Field { key, event } => {
                self.apply_field_event(key, event);
                None
            }
        }
    }

    /// Validates and, when valid, calls the submit handler once.
    pub fn submit(&mut self) -> SubmitOutcome {
        let handler = &mut self.on_submit;
        self.controller.submit(|bag| match handler.as_mut() {
            Some(handler) => handler(bag),
            None => tracing::debug!("valid submission with no handler"),
        })
    }

    /// Renders every visible field followed by the submit control.
    pub fn render(&self) -> RenderedForm {
        let idle = ControlState::default();
        let controls = self
            .controller
            .fields()
            .iter()
            .filter(|field| !field.hidden)
            .map(|field| {
                let control = self.registry.resolve(&field.kind);
                let state = self.ui_state.get(&field.key).unwrap_or(&idle);
                let errors = self.displayed_errors(&field.name);
                let bound = BoundField::new(
                    field,
                    self.controller.value(&field.name),
                    errors,
                    control,
                    state,
                );
                RenderedControl {
                    key: field.key.clone(),
                    name: field.name.clone(),
                    control_type: control.control_type(),
                    html: bound.as_div(),
                    errors: bound.errors.clone(),
                }
            })
            .collect();

        RenderedForm {
            controls,
            submit: SubmitButton {
                label: self.confirm_button_label.clone(),
                disabled: self.loading,
            },
        }
    }

    fn apply_field_event(&mut self, key: String, event: ControlEvent) {
        let fields = self.controller.fields();
        let Some(index) = fields.iter().position(|f| f.key == key) else {
            tracing::warn!(key = %key, "event for a field not in the schema");
            return;
        };
        let control = self.registry.resolve(&fields[index].kind);
        let state = self.ui_state.entry(key).or_default();
        let mut binding = self.controller.bind_index(index);
        control.handle(event, &mut binding, state);
    }
}
