//! Products, categories, and brands behind a tab menu.

use storedesk_core::StoreDeskResult;

use crate::list_view::{ColumnDef, DataTable, Record};
use crate::menu::CustomMenu;
use crate::mocks::{Named, Product};
use crate::pages::{format_price, DashboardPage, PageRequest};

/// Tab names in display order.
pub const PRODUCT_TABS: [&str; 3] = ["product", "categories", "brands"];

/// Columns of the products table.
pub fn product_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name"),
        ColumnDef::new("brand", "Brand"),
        ColumnDef::new("category", "Category"),
        ColumnDef::new("modelYear", "Model Year"),
        ColumnDef::new("listPrice", "List Price"),
    ]
}

/// Builds the table row for a product.
pub fn product_record(product: &Product) -> Record {
    Record::new()
        .with("id", product.id)
        .with("name", &product.name)
        .with("brand", &product.brand)
        .with("category", &product.category)
        .with("modelYear", product.model_year)
        .with("listPrice", format_price(product.list_price))
}

fn named_table(rows: &[Named]) -> DataTable {
    let records = rows
        .iter()
        .map(|row| Record::new().with("id", row.id).with("name", &row.name))
        .collect();
    DataTable::new(
        vec![ColumnDef::new("id", "ID"), ColumnDef::new("name", "Name")],
        records,
    )
    .row_id("id")
}

/// Products, categories, and brands behind a tab menu.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    menu: CustomMenu,
    products: DataTable,
    categories: DataTable,
    brands: DataTable,
}

impl ProductsPage {
    /// Builds the three tables. Only the products table is paginated.
    pub fn new(products: &[Product], categories: &[Named], brands: &[Named], per_page: usize) -> Self {
        Self {
            menu: CustomMenu::new(PRODUCT_TABS),
            products: DataTable::new(product_columns(), products.iter().map(product_record).collect())
                .pagination(true)
                .per_page(per_page)
                .row_id("id"),
            categories: named_table(categories),
            brands: named_table(brands),
        }
    }
}

impl DashboardPage for ProductsPage {
    fn name(&self) -> &'static str {
        "products"
    }

    fn title(&self) -> &'static str {
        "Products"
    }

    fn render(&self, request: &PageRequest) -> StoreDeskResult<String> {
        let mut menu = self.menu.clone();
        if let Some(tab) = &request.tab {
            menu.select(tab)?;
        }
        let content = match menu.active() {
            Some("categories") => self.categories.render_html(),
            Some("brands") => self.brands.render_html(),
            _ => self.products.clone().page(request.page).render_html(),
        };
        Ok(menu.render_html(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storedesk_core::StoreDeskError;

    fn page() -> ProductsPage {
        let products = vec![Product {
            id: 1,
            name: "Trek 820 - 2016".into(),
            brand: "Trek".into(),
            category: "Mountain Bikes".into(),
            model_year: 2016,
            list_price: 379.99,
        }];
        let categories = vec![Named {
            id: 6,
            name: "Mountain Bikes".into(),
        }];
        let brands = vec![Named {
            id: 7,
            name: "Trek".into(),
        }];
        ProductsPage::new(&products, &categories, &brands, 10)
    }

    #[test]
    fn test_default_tab_is_products() {
        let html = page().render(&PageRequest::default()).unwrap();
        assert!(html.contains(r#"<a class="active item" data-tab="product">Product</a>"#));
        assert!(html.contains("<td>$379.99</td>"));
    }

    #[test]
    fn test_brands_tab() {
        let html = page().render(&PageRequest::default().tab("brands")).unwrap();
        assert!(html.contains(r#"<a class="active item" data-tab="brands">Brands</a>"#));
        assert!(html.contains(r#"<tr data-id="7"><td>7</td><td>Trek</td></tr>"#));
        assert!(!html.contains("$379.99"));
    }

    #[test]
    fn test_unknown_tab() {
        let err = page().render(&PageRequest::default().tab("stock")).unwrap_err();
        assert!(matches!(err, StoreDeskError::NotFound(_)));
    }
}
