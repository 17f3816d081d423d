//! HAL (`application/hal+json`).

use serde_json::{Map, Value};

use super::links::{grouped_object, with_self_link};
use super::Adapter;
use crate::types::{maybe_paginate, Collection, Item, Link};

/// `_embedded` key used when a collection has no name.
const DEFAULT_EMBEDDED_NAME: &str = "items";

pub struct HalAdapter;

fn link_value(link: &Link) -> Value {
    let mut obj = Map::new();
    obj.insert("href".to_string(), Value::from(link.href.as_str()));
    if let Some(title) = &link.title {
        obj.insert("title".to_string(), Value::from(title.as_str()));
    }
    if link.is_template() {
        obj.insert("templated".to_string(), Value::Bool(true));
    }
    Value::Object(obj)
}

fn insert_links(out: &mut Map<String, Value>, links: &[Link]) {
    if !links.is_empty() {
        out.insert(
            "_links".to_string(),
            Value::Object(grouped_object(links, link_value)),
        );
    }
}

impl HalAdapter {
    fn items_value(&self, items: &[Item]) -> Value {
        Value::Array(items.iter().map(|item| self.transform_item(item)).collect())
    }
}

impl Adapter for HalAdapter {
    fn transform_collection(&self, collection: &Collection) -> Value {
        let mut out = Map::new();
        let links = with_self_link(
            collection.href.as_deref(),
            maybe_paginate(&collection.links, collection.pagination.as_ref()),
        );
        insert_links(&mut out, &links);

        if let Some(pagination) = &collection.pagination {
            out.insert("total".to_string(), Value::from(pagination.total_count));
        }

        let items = collection.items();
        if !items.is_empty() {
            let name = collection.name.as_deref().unwrap_or(DEFAULT_EMBEDDED_NAME);
            let mut embedded = Map::new();
            embedded.insert(name.to_string(), self.items_value(items));
            out.insert("_embedded".to_string(), Value::Object(embedded));
        }
        Value::Object(out)
    }

    fn transform_item(&self, item: &Item) -> Value {
        let mut out = item.properties.clone();
        let links = with_self_link(item.href.as_deref(), item.links.clone());
        insert_links(&mut out, &links);

        let embedded: Map<String, Value> = item
            .embedded
            .iter()
            .filter(|(_, nested)| !nested.is_empty())
            .map(|(name, nested)| (name.clone(), self.items_value(nested)))
            .collect();
        if !embedded.is_empty() {
            out.insert("_embedded".to_string(), Value::Object(embedded));
        }
        Value::Object(out)
    }
}
