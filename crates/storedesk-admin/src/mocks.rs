//! Embedded fixture data.
//!
//! The dashboard has no backend; every page reads from the JSON fixtures
//! under `mocks/`, compiled into the binary. [`MockData::load`] parses them
//! all at once so a malformed fixture fails fast.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storedesk_core::{StoreDeskError, StoreDeskResult};

const CUSTOMERS: &str = include_str!("../mocks/customers.json");
const STAFFS: &str = include_str!("../mocks/staffs.json");
const PRODUCTS: &str = include_str!("../mocks/products.json");
const BRANDS: &str = include_str!("../mocks/brands.json");
const CATEGORIES: &str = include_str!("../mocks/categories.json");
const ORDERS: &str = include_str!("../mocks/orders.json");
const ORDER_ITEMS: &str = include_str!("../mocks/order_items.json");
const STORES: &str = include_str!("../mocks/stores.json");

/// A customer fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// A staff member's manager, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A staff member fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    /// `0` when inactive.
    pub active: u8,
    pub store: String,
    #[serde(default)]
    pub manager: Option<PersonName>,
}

/// A product fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub model_year: u16,
    pub list_price: f64,
}

/// A brand or category: an id and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    pub id: u64,
    pub name: String,
}

/// An order fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub customer: String,
    /// An [`OrderStatus`](crate::lookups::OrderStatus) code.
    pub status: u8,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    #[serde(default)]
    pub shipped_date: Option<NaiveDate>,
    pub store: String,
    pub staff: String,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_id: u64,
    pub item_id: u64,
    pub product: String,
    pub quantity: u32,
    pub list_price: f64,
    pub discount: f64,
}

/// Editable store details, as bound by the store form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// Every fixture, parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MockData {
    pub customers: Vec<Customer>,
    pub staffs: Vec<Staff>,
    pub products: Vec<Product>,
    pub brands: Vec<Named>,
    pub categories: Vec<Named>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub stores: Vec<StoreInfo>,
}

impl MockData {
    /// Parses all embedded fixtures.
    pub fn load() -> StoreDeskResult<Self> {
        let data = Self {
            customers: parse_fixture("customers", CUSTOMERS)?,
            staffs: parse_fixture("staffs", STAFFS)?,
            products: parse_fixture("products", PRODUCTS)?,
            brands: parse_fixture("brands", BRANDS)?,
            categories: parse_fixture("categories", CATEGORIES)?,
            orders: parse_fixture("orders", ORDERS)?,
            order_items: parse_fixture("order_items", ORDER_ITEMS)?,
            stores: parse_fixture("stores", STORES)?,
        };
        tracing::debug!(
            customers = data.customers.len(),
            orders = data.orders.len(),
            stores = data.stores.len(),
            "mock fixtures loaded"
        );
        Ok(data)
    }

    /// Returns the items of order `order_id`, in item order.
    pub fn items_of(&self, order_id: u64) -> Vec<&OrderItem> {
        let mut items: Vec<&OrderItem> = self
            .order_items
            .iter()
            .filter(|item| item.order_id == order_id)
            .collect();
        items.sort_by_key(|item| item.item_id);
        items
    }

    /// Returns the order with `id`.
    pub fn order(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Returns the store with `id`.
    pub fn store(&self, id: u64) -> Option<&StoreInfo> {
        self.stores.iter().find(|s| s.id == id)
    }
}

/// Parses one fixture, naming it in the error.
pub fn parse_fixture<T: DeserializeOwned>(name: &str, json: &str) -> StoreDeskResult<Vec<T>> {
    serde_json::from_str(json)
        .map_err(|e| StoreDeskError::SerializationError(format!("fixture `{name}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_all_fixtures() {
        let data = MockData::load().unwrap();
        assert_eq!(data.customers.len(), 12);
        assert_eq!(data.staffs.len(), 6);
        assert_eq!(data.brands.len(), 7);
        assert_eq!(data.categories.len(), 7);
        assert_eq!(data.stores.len(), 3);
        assert!(!data.products.is_empty());
    }

    #[test]
    fn test_optional_fields() {
        let data = MockData::load().unwrap();
        assert!(data.customers[0].phone.is_none());
        assert_eq!(data.customers[4].phone.as_deref(), Some("(916) 381-6003"));
        assert!(data.staffs[0].manager.is_none());
        assert_eq!(
            data.staffs[1].manager.as_ref().map(PersonName::full_name),
            Some("Fabiola Jackson".to_string())
        );
    }

    #[test]
    fn test_dates_parse() {
        let data = MockData::load().unwrap();
        let order = data.order(3).unwrap();
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2016, 1, 2).unwrap());
        assert!(order.shipped_date.is_none());
    }

    #[test]
    fn test_items_of() {
        let data = MockData::load().unwrap();
        let items = data.items_of(3);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].item_id, 1);
        assert!(data.items_of(5).is_empty());
    }

    #[test]
    fn test_parse_fixture_error_names_fixture() {
        let err = parse_fixture::<Named>("brands", "[{\"id\": \"x\"}]").unwrap_err();
        assert!(matches!(err, StoreDeskError::SerializationError(_)));
        assert!(err.to_string().contains("fixture `brands`"));
    }
}
