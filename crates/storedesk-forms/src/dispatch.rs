//! Kind-to-control dispatch.
//!
//! The registry maps a [`FieldKind`] tag to the [`Control`] that renders it.
//! Adding a kind means registering one control; nothing else in the engine
//! branches on kinds. A tag with no registered control falls back to a
//! plain text input so a schema from a newer source still renders.

use std::collections::HashMap;

use crate::schema::FieldKind;
use crate::widgets::{Control, SearchSelect, TextInput};

/// Maps kind tags to controls.
#[derive(Debug)]
pub struct RendererRegistry {
    controls: HashMap<String, Box<dyn Control>>,
    fallback: TextInput,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RendererRegistry {
    /// Creates a registry with no controls. Every kind falls back.
    pub fn empty() -> Self {
        Self {
            controls: HashMap::new(),
            fallback: TextInput,
        }
    }

    /// Creates a registry with the built-in text input and select controls.
    pub fn builtin() -> Self {
        Self::empty()
            .register(FieldKind::TEXT_INPUT, TextInput)
            .register(FieldKind::SELECT, SearchSelect)
    }

    /// Registers `control` for `tag`, replacing any previous registration.
    #[must_use]
    pub fn register(mut self, tag: impl Into<String>, control: impl Control + 'static) -> Self {
        self.controls.insert(tag.into(), Box::new(control));
        self
    }

    /// Returns `true` if a control is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.controls.contains_key(tag)
    }

    /// Returns the control for `kind`.
    ///
    /// Unknown tags resolve to a text input and log a warning.
    pub fn resolve(&self, kind: &FieldKind) -> &dyn Control {
        match self.controls.get(kind.tag()) {
            Some(control) => control.as_ref(),
            None => {
                tracing::warn!(kind = %kind, "no control registered for field kind, using text input");
                &self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::ControlType;

    #[test]
    fn test_builtin_resolves_known_kinds() {
        let registry = RendererRegistry::builtin();
        let text = FieldKind::TextInput {
            input_type: crate::schema::InputType::Text,
        };
        let select = FieldKind::Select { options: vec![] };
        assert_eq!(registry.resolve(&text).control_type(), ControlType::TextInput);
        assert_eq!(registry.resolve(&select).control_type(), ControlType::SearchSelect);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_text_input() {
        let registry = RendererRegistry::builtin();
        let kind = FieldKind::Other("unknown-future-type".into());
        assert!(!registry.contains("unknown-future-type"));
        assert_eq!(registry.resolve(&kind).control_type(), ControlType::TextInput);
    }

    #[test]
    fn test_register_custom_tag() {
        let registry = RendererRegistry::builtin().register("state-picker", SearchSelect);
        let kind = FieldKind::Other("state-picker".into());
        assert_eq!(registry.resolve(&kind).control_type(), ControlType::SearchSelect);
    }

    #[test]
    fn test_empty_registry_falls_back_everywhere() {
        let registry = RendererRegistry::empty();
        let select = FieldKind::Select { options: vec![] };
        assert_eq!(registry.resolve(&select).control_type(), ControlType::TextInput);
    }
}
