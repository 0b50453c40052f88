//! A generic, column-driven list view.
//!
//! [`DataTable`] renders [`Record`]s through a list of [`ColumnDef`]s. Each
//! column names a record key and a header; cells for keys a record lacks
//! render empty. With pagination enabled the table shows one page of rows
//! and a page menu in its footer.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use storedesk_core::utils::text::escape_html;

use crate::pagination::{PageLink, Paginator};

/// One table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// The record key read for each cell.
    pub key: String,
    /// Header text.
    pub header: String,
}

impl ColumnDef {
    /// Creates a column showing `key` under `header`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
        }
    }
}

/// One table row: display strings keyed by column key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Sets a cell when `value` is present; otherwise leaves it missing.
    #[must_use]
    pub fn with_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Returns a cell.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Sort order for [`DataTable::sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// A table of records.
#[derive(Debug, Clone)]
pub struct DataTable {
    columns: Vec<ColumnDef>,
    data: Vec<Record>,
    pagination: bool,
    per_page: usize,
    current_page: usize,
    row_id: Option<String>,
}

impl DataTable {
    /// Default rows per page.
    pub const DEFAULT_PER_PAGE: usize = 10;

    /// Creates an unpaginated table.
    pub fn new(columns: Vec<ColumnDef>, data: Vec<Record>) -> Self {
        Self {
            columns,
            data,
            pagination: false,
            per_page: Self::DEFAULT_PER_PAGE,
            current_page: 1,
            row_id: None,
        }
    }

    /// Enables or disables pagination.
    #[must_use]
    pub const fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Selects the page to show. Out-of-range numbers are clamped.
    #[must_use]
    pub fn page(mut self, number: usize) -> Self {
        self.current_page = Paginator::new(&self.data, self.per_page)
            .get_page(number)
            .number();
        self
    }

    /// Emits each row's value for `key` as a `data-id` attribute.
    #[must_use]
    pub fn row_id(mut self, key: impl Into<String>) -> Self {
        self.row_id = Some(key.into());
        self
    }

    /// Returns the columns.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns every record in current order.
    pub fn records(&self) -> &[Record] {
        &self.data
    }

    /// Returns the selected page number.
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the records shown on the current page.
    pub fn visible_records(&self) -> &[Record] {
        if self.pagination {
            Paginator::new(&self.data, self.per_page)
                .get_page(self.current_page)
                .rows()
        } else {
            &self.data
        }
    }

    /// Sorts rows by the cells of `column`.
    ///
    /// The sort is stable and compares strings; rows missing the cell sort
    /// first when ascending.
    pub fn sort_by(&mut self, column: &str, direction: SortDirection) {
        self.data.sort_by(|a, b| {
            let ord = compare_cells(a.get(column), b.get(column));
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    /// Renders the table.
    pub fn render_html(&self) -> String {
        let mut html = String::from(r#"<table class="ui celled table"><thead><tr>"#);
        for column in &self.columns {
            html.push_str(&format!("<th>{}</th>", escape_html(&column.header)));
        }
        html.push_str("</tr></thead><tbody>");

        for record in self.visible_records() {
            match self.row_id.as_deref().and_then(|key| record.get(key)) {
                Some(id) => html.push_str(&format!(r#"<tr data-id="{}">"#, escape_html(id))),
                None => html.push_str("<tr>"),
            }
            for column in &self.columns {
                let cell = record.get(&column.key).unwrap_or("");
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");

        if self.pagination {
            html.push_str(&self.render_footer());
        }
        html.push_str("</table>");
        html
    }

    fn render_footer(&self) -> String {
        let paginator = Paginator::new(&self.data, self.per_page);
        let page = paginator.get_page(self.current_page);

        let mut menu = String::new();
        if page.has_previous() {
            menu.push_str(&format!(
                r#"<a class="icon item" data-page="{}">&laquo;</a>"#,
                page.number() - 1
            ));
        }
        for link in paginator.elided_page_range(page.number(), 2, 1) {
            match link {
                PageLink::Number(n) if n == page.number() => {
                    menu.push_str(&format!(r#"<a class="active item" data-page="{n}">{n}</a>"#));
                }
                PageLink::Number(n) => {
                    menu.push_str(&format!(r#"<a class="item" data-page="{n}">{n}</a>"#));
                }
                PageLink::Ellipsis => menu.push_str(r#"<div class="disabled item">&hellip;</div>"#),
            }
        }
        if page.has_next() {
            menu.push_str(&format!(
                r#"<a class="icon item" data-page="{}">&raquo;</a>"#,
                page.number() + 1
            ));
        }

        format!(
            concat!(
                r#"<tfoot><tr><th colspan="{cols}">"#,
                r#"<span class="summary">{start}-{end} of {count}</span>"#,
                r#"<div class="ui right floated pagination menu">{menu}</div>"#,
                "</th></tr></tfoot>"
            ),
            cols = self.columns.len().max(1),
            start = page.start_index(),
            end = page.end_index(),
            count = paginator.count(),
            menu = menu,
        )
    }
}

fn compare_cells(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}
