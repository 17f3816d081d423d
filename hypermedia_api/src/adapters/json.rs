//! Plain JSON: properties and a flat `{rel, href}` link list, nothing else.

use serde_json::{Map, Value};

use super::links::rel_href;
use super::Adapter;
use crate::types::{Collection, Item, Link};

pub struct JsonAdapter;

fn links_value(links: &[Link]) -> Value {
    Value::Array(links.iter().map(rel_href).collect())
}

impl Adapter for JsonAdapter {
    fn transform_collection(&self, collection: &Collection) -> Value {
        let mut out = Map::new();
        let items = collection.items();
        if !items.is_empty() {
            out.insert(
                "items".to_string(),
                Value::Array(items.iter().map(|item| self.transform_item(item)).collect()),
            );
        }
        if !collection.links.is_empty() {
            out.insert("links".to_string(), links_value(&collection.links));
        }
        Value::Object(out)
    }

    fn transform_item(&self, item: &Item) -> Value {
        let mut out = item.properties.clone();
        if !item.links.is_empty() {
            out.insert("links".to_string(), links_value(&item.links));
        }
        Value::Object(out)
    }
}
