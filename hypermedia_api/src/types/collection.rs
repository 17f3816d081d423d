use serde::{Deserialize, Serialize};

use super::{Item, Link, Pagination};

/// An aggregate of items plus collection-level links and pagination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Collection name. HAL uses it as the `_embedded` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.get_or_insert_with(Vec::new).extend(items);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links.extend(links);
        self
    }

    /// The collection's items; empty when none were supplied.
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }
}
