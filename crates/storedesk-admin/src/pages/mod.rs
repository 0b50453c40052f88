//! Dashboard pages.
//!
//! Each page implements [`DashboardPage`] and renders an HTML fragment for a
//! [`PageRequest`]. Pages are built once from [`MockData`](crate::mocks::MockData)
//! and rendered many times.

pub mod customers;
pub mod orders;
pub mod products;
pub mod staff;
pub mod store;

use storedesk_core::StoreDeskResult;

/// Parameters of one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number for paginated tables.
    pub page: usize,
    /// Tab to activate on tabbed pages.
    pub tab: Option<String>,
    /// Record to focus (an order's items, a store to edit).
    pub record: Option<u64>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            tab: None,
            record: None,
        }
    }
}

impl PageRequest {
    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Sets the tab to activate.
    #[must_use]
    pub fn tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }

    /// Sets the record to focus.
    #[must_use]
    pub const fn record(mut self, id: u64) -> Self {
        self.record = Some(id);
        self
    }
}

/// A routable dashboard page.
pub trait DashboardPage {
    /// The route name (e.g. "customers").
    fn name(&self) -> &'static str;

    /// Heading shown above the page.
    fn title(&self) -> &'static str;

    /// Renders the page body.
    fn render(&self, request: &PageRequest) -> StoreDeskResult<String>;
}

/// Formats a price as dollars with two decimals.
pub(crate) fn format_price(amount: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let amount = amount + 0.0;
    format!("${amount:.2}")
}
