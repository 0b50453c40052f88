//! Store details: a list of stores and an edit form for one of them.

use storedesk_core::utils::text::escape_html;
use storedesk_core::{StoreDeskError, StoreDeskResult};
use storedesk_forms::{
    ControlEvent, DynamicForm, FieldDescriptor, FieldKind, FormEvent, InputType, ValueBag,
};

use crate::lookups::{usa_state_converter, usa_state_options};
use crate::mocks::StoreInfo;
use crate::pages::{DashboardPage, PageRequest};

/// The store edit schema.
pub fn store_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("id").hidden(true),
        FieldDescriptor::text("name").label("Name").required(true),
        FieldDescriptor::text("phone")
            .label("Phone")
            .input_type(InputType::Tel),
        FieldDescriptor::text("email")
            .label("Email")
            .input_type(InputType::Email),
        FieldDescriptor::text("street").label("Street"),
        FieldDescriptor::text("city").label("City"),
        FieldDescriptor::select("state", usa_state_options())
            .label("State")
            .placeholder("Select a state"),
        FieldDescriptor::text("zipCode").label("Zip Code"),
    ]
}

/// Seeds a bag from a store. Missing optional details stay undefined.
pub fn store_defaults(store: &StoreInfo) -> ValueBag {
    let mut bag = ValueBag::new();
    bag.insert("id", store.id.to_string());
    bag.insert("name", store.name.clone());
    let optional = [
        ("phone", &store.phone),
        ("email", &store.email),
        ("street", &store.street),
        ("city", &store.city),
        ("state", &store.state),
        ("zipCode", &store.zip_code),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            bag.insert(name, value.clone());
        }
    }
    bag
}

/// Builds the edit form for `store`.
pub fn store_form(store: &StoreInfo, confirm_label: &str) -> DynamicForm {
    DynamicForm::new(store_fields())
        .default_values(store_defaults(store))
        .confirm_button_label(confirm_label)
}

/// Applies a `key=value` assignment as the matching control would.
///
/// Select fields are chosen by option value.
///
/// # Errors
///
/// [`StoreDeskError::InvalidInput`] for an unknown key, or a select value
/// that is not one of the field's options.
pub fn apply_assignment(form: &mut DynamicForm, key: &str, value: &str) -> StoreDeskResult<()> {
    let field = form
        .controller()
        .fields()
        .iter()
        .find(|f| f.key == key)
        .ok_or_else(|| StoreDeskError::InvalidInput(format!("unknown field `{key}`")))?;

    let event = match &field.kind {
        FieldKind::Select { options } => {
            if !options.iter().any(|o| o.value == value) {
                return Err(StoreDeskError::InvalidInput(format!(
                    "`{value}` is not a valid choice for `{key}`"
                )));
            }
            ControlEvent::Choose(value.to_string())
        }
        _ => ControlEvent::Input(value.to_string()),
    };
    form.handle_event(FormEvent::field(key, event));
    Ok(())
}

/// One-line address, or an empty string when no detail is known.
pub fn store_address(store: &StoreInfo) -> String {
    let state = store
        .state
        .as_deref()
        .map(|code| usa_state_converter(code).unwrap_or(code));
    let parts: Vec<&str> = [store.street.as_deref(), store.city.as_deref(), state]
        .into_iter()
        .flatten()
        .collect();
    let mut address = parts.join(", ");
    if let Some(zip) = &store.zip_code {
        if !address.is_empty() {
            address.push(' ');
        }
        address.push_str(zip);
    }
    address
}

/// The store list and the edit form for one store.
#[derive(Debug, Clone)]
pub struct StorePage {
    stores: Vec<StoreInfo>,
    confirm_label: String,
}

impl StorePage {
    /// Creates the page over `stores`; `confirm_label` labels the form's submit control.
    pub fn new(stores: &[StoreInfo], confirm_label: impl Into<String>) -> Self {
        Self {
            stores: stores.to_vec(),
            confirm_label: confirm_label.into(),
        }
    }

    /// Returns the store with `id`, or the first store when `id` is `None`.
    ///
    /// # Errors
    ///
    /// [`StoreDeskError::NotFound`] when no store matches.
    pub fn store(&self, id: Option<u64>) -> StoreDeskResult<&StoreInfo> {
        let found = match id {
            Some(id) => self.stores.iter().find(|s| s.id == id),
            None => self.stores.first(),
        };
        found.ok_or_else(|| match id {
            Some(id) => StoreDeskError::NotFound(format!("store #{id}")),
            None => StoreDeskError::NotFound("no stores".to_string()),
        })
    }

    /// Builds the edit form for the selected store.
    pub fn form(&self, id: Option<u64>) -> StoreDeskResult<DynamicForm> {
        Ok(store_form(self.store(id)?, &self.confirm_label))
    }

    fn render_list(&self, selected: u64) -> String {
        let mut html = String::from(r#"<div class="ui divided selection list">"#);
        for store in &self.stores {
            let class = if store.id == selected { "active item" } else { "item" };
            html.push_str(&format!(
                r#"<div class="{class}" data-id="{}"><div class="header">{}</div>{}</div>"#,
                store.id,
                escape_html(&store.name),
                escape_html(&store_address(store))
            ));
        }
        html.push_str("</div>");
        html
    }
}

impl DashboardPage for StorePage {
    fn name(&self) -> &'static str {
        "store"
    }

    fn title(&self) -> &'static str {
        "Store"
    }

    fn render(&self, request: &PageRequest) -> StoreDeskResult<String> {
        let store = self.store(request.record)?;
        let form = store_form(store, &self.confirm_label);
        Ok(format!(
            "{}{}",
            self.render_list(store.id),
            form.render().to_html()
        ))
    }
}
