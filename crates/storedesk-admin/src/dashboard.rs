//! Page routing for the dashboard.
//!
//! [`Dashboard`] owns one instance of every page and routes a page name to
//! it. Rendering goes through [`Dashboard::render`], which wraps the page in
//! the navigation shell and runs inside a per-page tracing span.

use storedesk_core::logging::page_span;
use storedesk_core::utils::text::escape_html;
use storedesk_core::{Settings, StoreDeskError, StoreDeskResult};

use crate::mocks::MockData;
use crate::pages::customers::CustomersPage;
use crate::pages::orders::OrdersPage;
use crate::pages::products::ProductsPage;
use crate::pages::staff::StaffPage;
use crate::pages::store::StorePage;
use crate::pages::{DashboardPage, PageRequest};

/// Every dashboard page, routable by name.
pub struct Dashboard {
    pages: Vec<Box<dyn DashboardPage>>,
    store: StorePage,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("routes", &self.routes())
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Builds every page from `data` using the presentation settings.
    pub fn new(data: &MockData, settings: &Settings) -> Self {
        let per_page = settings.list_per_page;
        let store = StorePage::new(&data.stores, settings.confirm_button_label.clone());
        let pages: Vec<Box<dyn DashboardPage>> = vec![
            Box::new(CustomersPage::new(&data.customers, per_page)),
            Box::new(OrdersPage::new(&data.orders, &data.order_items, per_page)),
            Box::new(ProductsPage::new(
                &data.products,
                &data.categories,
                &data.brands,
                per_page,
            )),
            Box::new(StaffPage::new(&data.staffs)),
            Box::new(store.clone()),
        ];
        Self { pages, store }
    }

    /// Route names in navigation order.
    pub fn routes(&self) -> Vec<&'static str> {
        self.pages.iter().map(|p| p.name()).collect()
    }

    /// Returns the page for `name`.
    ///
    /// # Errors
    ///
    /// [`StoreDeskError::NotFound`] for an unknown route.
    pub fn page(&self, name: &str) -> StoreDeskResult<&dyn DashboardPage> {
        self.pages
            .iter()
            .find(|p| p.name() == name)
            .map(|p| &**p)
            .ok_or_else(|| {
                StoreDeskError::NotFound(format!(
                    "page `{name}` (available: {})",
                    self.routes().join(", ")
                ))
            })
    }

    /// Returns the store page, which also builds the store edit form.
    pub const fn store_page(&self) -> &StorePage {
        &self.store
    }

    /// Renders page `name` inside the navigation shell.
    pub fn render(&self, name: &str, request: &PageRequest) -> StoreDeskResult<String> {
        let page = self.page(name)?;
        let span = page_span(name);
        let _guard = span.enter();
        tracing::info!(page = request.page, tab = ?request.tab, record = ?request.record, "rendering page");

        let body = page.render(request)?;
        Ok(format!(
            concat!(
                r#"<div class="ui grid"><div class="three wide column">{nav}</div>"#,
                r#"<div class="thirteen wide column"><h2 class="ui header">{title}</h2>{body}</div></div>"#
            ),
            nav = self.render_nav(name),
            title = escape_html(page.title()),
            body = body,
        ))
    }

    fn render_nav(&self, active: &str) -> String {
        let mut html = String::from(r#"<div class="ui vertical fluid menu">"#);
        for page in &self.pages {
            let class = if page.name() == active { "active item" } else { "item" };
            html.push_str(&format!(
                r#"<a class="{class}" href="/{}">{}</a>"#,
                page.name(),
                escape_html(page.title())
            ));
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(&MockData::load().unwrap(), &Settings::default())
    }

    #[test]
    fn test_routes() {
        assert_eq!(
            dashboard().routes(),
            vec!["customers", "orders", "products", "staff", "store"]
        );
    }

    #[test]
    fn test_unknown_route() {
        let err = dashboard().render("reports", &PageRequest::default()).unwrap_err();
        assert!(matches!(err, StoreDeskError::NotFound(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_render_wraps_in_shell() {
        let html = dashboard().render("staff", &PageRequest::default()).unwrap();
        assert!(html.contains(r#"<a class="active item" href="/staff">Staff</a>"#));
        assert!(html.contains(r#"<h2 class="ui header">Staff</h2>"#));
    }

    #[test]
    fn test_store_page_uses_configured_label() {
        let settings = Settings {
            confirm_button_label: "Save store".into(),
            ..Settings::default()
        };
        let dashboard = Dashboard::new(&MockData::load().unwrap(), &settings);
        let html = dashboard.render("store", &PageRequest::default()).unwrap();
        assert!(html.contains(">Save store</button>"));
    }
}
