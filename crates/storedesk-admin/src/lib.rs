//! # storedesk-admin
//!
//! The store management dashboard: every page is either a [`list_view`]
//! table over fixture data or a dynamic form from `storedesk-forms`.
//!
//! - [`mocks`] - embedded JSON fixtures and their record types
//! - [`lookups`] - US state names, staff and order status enums
//! - [`pagination`] - page splitting for list views
//! - [`list_view`] - the generic column-driven table
//! - [`menu`] - a tab menu
//! - [`pages`] - customers, orders, products, staff, and store pages
//! - [`dashboard`] - routing page names to pages

pub mod dashboard;
pub mod list_view;
pub mod lookups;
pub mod menu;
pub mod mocks;
pub mod pages;
pub mod pagination;

pub use dashboard::Dashboard;
pub use list_view::{ColumnDef, DataTable, Record, SortDirection};
pub use mocks::MockData;
pub use pages::{DashboardPage, PageRequest};
