//! Orders, with a drill-down into one order's items.
//!
//! The page is a two-view switcher. It starts on the order list;
//! [`OrdersPage::show_items`] switches to the items of one order and
//! [`OrdersPage::back_to_orders`] returns to the list.

use chrono::NaiveDate;
use storedesk_core::utils::text::escape_html;
use storedesk_core::{StoreDeskError, StoreDeskResult};

use crate::list_view::{ColumnDef, DataTable, Record};
use crate::lookups::OrderStatus;
use crate::mocks::{Order, OrderItem};
use crate::pages::{format_price, DashboardPage, PageRequest};

/// Which view the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersView {
    /// All orders.
    List,
    /// The items of one order.
    Items(u64),
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Columns of the order list.
pub fn order_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("id", "Order #"),
        ColumnDef::new("customer", "Customer"),
        ColumnDef::new("status", "Status"),
        ColumnDef::new("orderDate", "Order Date"),
        ColumnDef::new("requiredDate", "Required Date"),
        ColumnDef::new("shippedDate", "Shipped Date"),
        ColumnDef::new("store", "Store"),
        ColumnDef::new("staff", "Staff"),
    ]
}

/// Builds the list row for an order.
pub fn order_record(order: &Order) -> Record {
    let status = OrderStatus::try_from(order.status)
        .map_or_else(|_| format!("Unknown ({})", order.status), |s| s.to_string());
    Record::new()
        .with("id", order.id)
        .with("customer", &order.customer)
        .with("status", status)
        .with("orderDate", format_date(order.order_date))
        .with("requiredDate", format_date(order.required_date))
        .with_opt("shippedDate", order.shipped_date.map(format_date))
        .with("store", &order.store)
        .with("staff", &order.staff)
}

/// Columns of the order items table.
pub fn item_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("itemId", "Item"),
        ColumnDef::new("product", "Product"),
        ColumnDef::new("quantity", "Quantity"),
        ColumnDef::new("listPrice", "List Price"),
        ColumnDef::new("discount", "Discount"),
        ColumnDef::new("total", "Total"),
    ]
}

/// Line total after discount.
pub fn item_total(item: &OrderItem) -> f64 {
    f64::from(item.quantity) * item.list_price * (1.0 - item.discount)
}

/// Builds the row for one order item.
pub fn item_record(item: &OrderItem) -> Record {
    Record::new()
        .with("itemId", item.item_id)
        .with("product", &item.product)
        .with("quantity", item.quantity)
        .with("listPrice", format_price(item.list_price))
        .with("discount", format!("{:.0}%", item.discount * 100.0))
        .with("total", format_price(item_total(item)))
}

/// The orders page and its current view.
#[derive(Debug, Clone)]
pub struct OrdersPage {
    orders: Vec<Order>,
    items: Vec<OrderItem>,
    per_page: usize,
    view: OrdersView,
}

impl OrdersPage {
    /// Creates the page on the order list.
    pub fn new(orders: &[Order], items: &[OrderItem], per_page: usize) -> Self {
        Self {
            orders: orders.to_vec(),
            items: items.to_vec(),
            per_page,
            view: OrdersView::List,
        }
    }

    /// Returns the current view.
    pub const fn view(&self) -> OrdersView {
        self.view
    }

    /// Switches to the items of order `id`.
    ///
    /// # Errors
    ///
    /// [`StoreDeskError::NotFound`] when no order has that id; the view is
    /// left unchanged.
    pub fn show_items(&mut self, id: u64) -> StoreDeskResult<()> {
        self.find_order(id)?;
        tracing::debug!(order = id, "showing order items");
        self.view = OrdersView::Items(id);
        Ok(())
    }

    /// Switches back to the order list.
    pub fn back_to_orders(&mut self) {
        self.view = OrdersView::List;
    }

    fn find_order(&self, id: u64) -> StoreDeskResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreDeskError::NotFound(format!("order #{id}")))
    }

    fn render_list(&self, page: usize) -> String {
        let records = self.orders.iter().map(order_record).collect();
        DataTable::new(order_columns(), records)
            .pagination(true)
            .per_page(self.per_page)
            .page(page)
            .row_id("id")
            .render_html()
    }

    fn render_items(&self, id: u64) -> StoreDeskResult<String> {
        let order = self.find_order(id)?;
        let mut items: Vec<&OrderItem> = self.items.iter().filter(|i| i.order_id == id).collect();
        items.sort_by_key(|i| i.item_id);
        let total = items.iter().fold(0.0, |acc, i| acc + item_total(i));
        let table = DataTable::new(item_columns(), items.into_iter().map(item_record).collect());
        Ok(format!(
            concat!(
                r#"<div class="ui segment">"#,
                r#"<a class="ui button" data-action="back">Back to orders</a>"#,
                "<h3>Order #{id} &middot; {customer}</h3>{table}",
                r#"<p class="total">Order total: {total}</p></div>"#
            ),
            id = order.id,
            customer = escape_html(&order.customer),
            table = table.render_html(),
            total = format_price(total),
        ))
    }
}

impl DashboardPage for OrdersPage {
    fn name(&self) -> &'static str {
        "orders"
    }

    fn title(&self) -> &'static str {
        "Orders"
    }

    /// A `record` in the request shows that order's items regardless of the
    /// current view.
    fn render(&self, request: &PageRequest) -> StoreDeskResult<String> {
        match request.record.map_or(self.view, OrdersView::Items) {
            OrdersView::List => Ok(self.render_list(request.page)),
            OrdersView::Items(id) => self.render_items(id),
        }
    }
}
