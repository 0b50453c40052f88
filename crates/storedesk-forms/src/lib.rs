//! # storedesk-forms
//!
//! A dynamic form engine. A form is described by an ordered list of
//! [`FieldDescriptor`]s; the engine renders one control per visible field,
//! keeps every value in a [`FormController`], and on submission validates
//! the whole schema before handing a [`ValueBag`] snapshot to the caller.
//!
//! - [`schema`] - field descriptors, kinds, and select options
//! - [`values`] - the value bag, the validation error set, external error overlays
//! - [`controller`] - the form state controller and field bindings
//! - [`validation`] - field-level validation rules
//! - [`widgets`] - the text input and searchable select controls
//! - [`dispatch`] - the kind-to-control registry
//! - [`bound_field`] - a descriptor paired with its value, errors, and control
//! - [`form`] - [`DynamicForm`], the engine callers construct
//!
//! ```
//! use storedesk_forms::{DynamicForm, FieldDescriptor, SelectOption, SubmitOutcome};
//!
//! let mut form = DynamicForm::new(vec![
//!     FieldDescriptor::text("email").required(true),
//!     FieldDescriptor::select("country", vec![SelectOption::new("US", "United States")]),
//! ]);
//! form.bind_field("email").set_value("a@b.com");
//! assert!(matches!(form.submit(), SubmitOutcome::Submitted(_)));
//! ```

pub mod bound_field;
pub mod controller;
pub mod dispatch;
pub mod form;
pub mod schema;
pub mod validation;
pub mod values;
pub mod widgets;

pub use controller::{FieldBinding, FormController, SubmitOutcome};
pub use dispatch::RendererRegistry;
pub use form::{DynamicForm, FormEvent, RenderedControl, RenderedForm};
pub use schema::{FieldDescriptor, FieldKind, InputType, SelectOption};
pub use values::{ErrorMessages, ErrorOverlay, ValidationErrorSet, ValueBag};
pub use widgets::{Control, ControlEvent, ControlState, ControlType};
