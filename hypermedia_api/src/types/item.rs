use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Link;

/// Named properties of an item, kept in insertion order.
pub type Properties = serde_json::Map<String, Value>;

/// A single renderable entity: properties, links and named groups of nested items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Relation of this item to its parent, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, alias = "item")]
    pub properties: Properties,

    /// Entity type (rendered as a Siren `class`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub embedded: BTreeMap<String, Vec<Item>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets a property, replacing any previous value under `key`.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties.extend(properties);
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

    /// Appends `items` to the embedding called `name`.
    pub fn with_embedded(
        mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        self.embedded.entry(name.into()).or_default().extend(items);
        self
    }
}
