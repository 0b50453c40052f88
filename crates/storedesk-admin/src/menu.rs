//! A tab menu with one active tab.

use storedesk_core::utils::text::{capfirst, escape_html};
use storedesk_core::{StoreDeskError, StoreDeskResult};

/// Named tabs, the first active until another is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMenu {
    names: Vec<String>,
    active: usize,
}

impl CustomMenu {
    /// Creates a menu over `names`, with the first tab active.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    /// Tab names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the active tab, or `None` for an empty menu.
    pub fn active(&self) -> Option<&str> {
        self.names.get(self.active).map(String::as_str)
    }

    /// Activates the tab called `name`.
    ///
    /// # Errors
    ///
    /// [`StoreDeskError::NotFound`] when no tab has that name.
    pub fn select(&mut self, name: &str) -> StoreDeskResult<()> {
        let index = self
            .names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                StoreDeskError::NotFound(format!(
                    "tab `{name}` (available: {})",
                    self.names.join(", ")
                ))
            })?;
        self.active = index;
        Ok(())
    }

    /// Renders the tab strip followed by `content` in the active segment.
    pub fn render_html(&self, content: &str) -> String {
        let mut html = String::from(r#"<div class="ui top attached tabular menu">"#);
        for (i, name) in self.names.iter().enumerate() {
            let class = if i == self.active { "active item" } else { "item" };
            html.push_str(&format!(
                r#"<a class="{class}" data-tab="{}">{}</a>"#,
                escape_html(name),
                escape_html(&capfirst(name))
            ));
        }
        html.push_str("</div>");
        html.push_str(r#"<div class="ui bottom attached active tab segment">"#);
        html.push_str(content);
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_active() {
        let menu = CustomMenu::new(["product", "categories", "brands"]);
        assert_eq!(menu.active(), Some("product"));
        assert_eq!(menu.names().len(), 3);
    }

    #[test]
    fn test_select() {
        let mut menu = CustomMenu::new(["product", "categories", "brands"]);
        menu.select("Brands").unwrap();
        assert_eq!(menu.active(), Some("brands"));
        let err = menu.select("orders").unwrap_err();
        assert!(matches!(err, StoreDeskError::NotFound(_)));
        assert_eq!(menu.active(), Some("brands"));
    }

    #[test]
    fn test_render() {
        let mut menu = CustomMenu::new(["product", "brands"]);
        menu.select("brands").unwrap();
        let html = menu.render_html("<p>x</p>");
        assert!(html.contains(r#"<a class="item" data-tab="product">Product</a>"#));
        assert!(html.contains(r#"<a class="active item" data-tab="brands">Brands</a>"#));
        assert!(html.ends_with(r#"<div class="ui bottom attached active tab segment"><p>x</p></div>"#));
    }

    #[test]
    fn test_empty_menu() {
        let menu = CustomMenu::new(Vec::<String>::new());
        assert_eq!(menu.active(), None);
    }
}
