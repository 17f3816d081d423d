//! Mason (`application/vnd.mason+json`).
//!
//! Links become `@controls`, grouped by rel like HAL. `curies` links are a HAL
//! concept and never appear in Mason output.

use serde_json::{Map, Value};

use super::links::{grouped_object, with_self_link};
use super::Adapter;
use crate::types::{maybe_paginate, Collection, Item, Link};

const CURIES_REL: &str = "curies";

pub struct MasonAdapter;

fn control_value(link: &Link) -> Value {
    let mut obj = Map::new();
    obj.insert("href".to_string(), Value::from(link.href.as_str()));
    if let Some(title) = &link.title {
        obj.insert("title".to_string(), Value::from(title.as_str()));
    }
    if link.is_template() {
        obj.insert("isHrefTemplate".to_string(), Value::Bool(true));
    }
    Value::Object(obj)
}

fn insert_controls(out: &mut Map<String, Value>, links: &[Link]) {
    let controls = grouped_object(
        links.iter().filter(|link| !link.has_rel(CURIES_REL)),
        control_value,
    );
    if !controls.is_empty() {
        out.insert("@controls".to_string(), Value::Object(controls));
    }
}

impl Adapter for MasonAdapter {
    fn transform_collection(&self, collection: &Collection) -> Value {
        let mut out = Map::new();
        out.insert(
            "name".to_string(),
            collection
                .name
                .as_deref()
                .map_or(Value::Null, Value::from),
        );
        if let Some(pagination) = &collection.pagination {
            out.insert("total".to_string(), Value::from(pagination.total_count));
        }

        let items = collection.items();
        if !items.is_empty() {
            out.insert(
                "entities".to_string(),
                Value::Array(items.iter().map(|item| self.transform_item(item)).collect()),
            );
        }

        let links = with_self_link(
            collection.href.as_deref(),
            maybe_paginate(&collection.links, collection.pagination.as_ref()),
        );
        insert_controls(&mut out, &links);
        Value::Object(out)
    }

    fn transform_item(&self, item: &Item) -> Value {
        let mut out = item.properties.clone();
        let links = with_self_link(item.href.as_deref(), item.links.clone());
        insert_controls(&mut out, &links);
        Value::Object(out)
    }
}
