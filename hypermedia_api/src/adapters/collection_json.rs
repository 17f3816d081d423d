//! Collection+JSON (`application/vnd.collection+json`).
//!
//! Properties become ordered `{name, value}` pairs, `self` links are dropped in
//! favour of the `href` member, and a bare item is wrapped in a one-item
//! collection envelope.

use serde_json::{Map, Value};

use super::Adapter;
use crate::types::{maybe_paginate, Collection, Item, Link};

const VERSION: &str = "1.0";

pub struct CollectionJsonAdapter;

fn link_value(link: &Link) -> Value {
    let mut obj = Map::new();
    obj.insert("rel".to_string(), Value::from(link.rel.as_str()));
    obj.insert("href".to_string(), Value::from(link.href.as_str()));
    if let Some(title) = &link.title {
        obj.insert("prompt".to_string(), Value::from(title.as_str()));
    }
    Value::Object(obj)
}

fn links_value<'a>(links: impl IntoIterator<Item = &'a Link>) -> Option<Value> {
    let rendered: Vec<Value> = links
        .into_iter()
        .filter(|link| !link.has_rel("self"))
        .map(link_value)
        .collect();
    (!rendered.is_empty()).then_some(Value::Array(rendered))
}

fn envelope(href: Option<&str>, items: Vec<Value>, links: Option<Value>) -> Value {
    let mut inner = Map::new();
    inner.insert("version".to_string(), Value::from(VERSION));
    if let Some(href) = href {
        inner.insert("href".to_string(), Value::from(href));
    }
    if !items.is_empty() {
        inner.insert("items".to_string(), Value::Array(items));
    }
    if let Some(links) = links {
        inner.insert("links".to_string(), links);
    }
    let mut out = Map::new();
    out.insert("collection".to_string(), Value::Object(inner));
    Value::Object(out)
}

impl CollectionJsonAdapter {
    /// Renders one entry of the `items` array.
    fn item_value(&self, item: &Item) -> Value {
        let mut obj = Map::new();
        if let Some(href) = &item.href {
            obj.insert("href".to_string(), Value::from(href.as_str()));
        }
        let data = item
            .properties
            .iter()
            .map(|(name, value)| {
                let mut pair = Map::new();
                pair.insert("name".to_string(), Value::from(name.as_str()));
                pair.insert("value".to_string(), value.clone());
                Value::Object(pair)
            })
            .collect();
        obj.insert("data".to_string(), Value::Array(data));
        if let Some(links) = links_value(&item.links) {
            obj.insert("links".to_string(), links);
        }
        Value::Object(obj)
    }
}

impl Adapter for CollectionJsonAdapter {
    fn transform_collection(&self, collection: &Collection) -> Value {
        let links = maybe_paginate(&collection.links, collection.pagination.as_ref());
        let items = collection
            .items()
            .iter()
            .map(|item| self.item_value(item))
            .collect();
        envelope(collection.href.as_deref(), items, links_value(&links))
    }

    fn transform_item(&self, item: &Item) -> Value {
        envelope(item.href.as_deref(), vec![self.item_value(item)], None)
    }
}
