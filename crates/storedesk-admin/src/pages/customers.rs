//! Customer list.

use storedesk_core::StoreDeskResult;

use crate::list_view::{ColumnDef, DataTable, Record};
use crate::lookups::usa_state_converter;
use crate::mocks::Customer;
use crate::pages::{DashboardPage, PageRequest};

/// Columns of the customers table.
pub fn customer_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("fullName", "Full Name"),
        ColumnDef::new("phone", "Phone"),
        ColumnDef::new("email", "Email"),
        ColumnDef::new("address", "Address"),
        ColumnDef::new("zipCode", "Zipcode"),
    ]
}

/// Formats "street, city, state name". Unknown state codes are kept as is.
pub fn customer_address(customer: &Customer) -> String {
    let state = usa_state_converter(&customer.state).unwrap_or(&customer.state);
    format!("{}, {}, {state}", customer.street, customer.city)
}

/// Builds the table row for a customer.
pub fn customer_record(customer: &Customer) -> Record {
    Record::new()
        .with("id", customer.id)
        .with("fullName", format!("{} {}", customer.first_name, customer.last_name))
        .with_opt("phone", customer.phone.as_deref())
        .with("email", &customer.email)
        .with("address", customer_address(customer))
        .with("zipCode", &customer.zip_code)
}

/// Paginated customer table.
#[derive(Debug, Clone)]
pub struct CustomersPage {
    table: DataTable,
}

impl CustomersPage {
    /// Creates the page with `per_page` customers per table page.
    pub fn new(customers: &[Customer], per_page: usize) -> Self {
        let records = customers.iter().map(customer_record).collect();
        Self {
            table: DataTable::new(customer_columns(), records)
                .pagination(true)
                .per_page(per_page)
                .row_id("id"),
        }
    }
}

impl DashboardPage for CustomersPage {
    fn name(&self) -> &'static str {
        "customers"
    }

    fn title(&self) -> &'static str {
        "Customers"
    }

    fn render(&self, request: &PageRequest) -> StoreDeskResult<String> {
        Ok(self.table.clone().page(request.page).render_html())
    }
}
