//! Siren (`application/vnd.siren+json`).
//!
//! Siren has no named embeddings, so every embedded group is flattened into a
//! single `entities` list. Nested entities without a rel take their embedding
//! name as rel.

use serde_json::{Map, Value};

use super::links::with_self_link;
use super::Adapter;
use crate::types::{maybe_paginate, Collection, Item, Link};

pub struct SirenAdapter;

fn single(value: &str) -> Value {
    Value::Array(vec![Value::from(value)])
}

fn link_value(link: &Link) -> Value {
    let mut obj = Map::new();
    obj.insert("rel".to_string(), single(&link.rel));
    obj.insert("href".to_string(), Value::from(link.href.as_str()));
    if let Some(title) = &link.title {
        obj.insert("title".to_string(), Value::from(title.as_str()));
    }
    Value::Object(obj)
}

fn insert_links(out: &mut Map<String, Value>, links: &[Link]) {
    if !links.is_empty() {
        out.insert(
            "links".to_string(),
            Value::Array(links.iter().map(link_value).collect()),
        );
    }
}

impl SirenAdapter {
    fn entity(&self, item: &Item, fallback_rel: Option<&str>) -> Value {
        let mut out = Map::new();
        if let Some(kind) = &item.kind {
            out.insert("class".to_string(), single(kind));
        }
        if let Some(rel) = item.rel.as_deref().or(fallback_rel) {
            out.insert("rel".to_string(), single(rel));
        }
        if !item.properties.is_empty() {
            out.insert(
                "properties".to_string(),
                Value::Object(item.properties.clone()),
            );
        }
        let links = with_self_link(item.href.as_deref(), item.links.clone());
        insert_links(&mut out, &links);

        let entities: Vec<Value> = item
            .embedded
            .iter()
            .flat_map(|(name, nested)| {
                nested
                    .iter()
                    .map(move |child| self.entity(child, Some(name.as_str())))
            })
            .collect();
        if !entities.is_empty() {
            out.insert("entities".to_string(), Value::Array(entities));
        }
        Value::Object(out)
    }
}

impl Adapter for SirenAdapter {
    fn transform_collection(&self, collection: &Collection) -> Value {
        let mut out = Map::new();
        if let Some(name) = &collection.name {
            out.insert("title".to_string(), Value::from(name.as_str()));
        }
        if let Some(pagination) = &collection.pagination {
            let mut properties = Map::new();
            properties.insert("total".to_string(), Value::from(pagination.total_count));
            out.insert("properties".to_string(), Value::Object(properties));
        }
        let links = with_self_link(
            collection.href.as_deref(),
            maybe_paginate(&collection.links, collection.pagination.as_ref()),
        );
        insert_links(&mut out, &links);

        let items = collection.items();
        if !items.is_empty() {
            out.insert(
                "entities".to_string(),
                Value::Array(items.iter().map(|item| self.entity(item, None)).collect()),
            );
        }
        Value::Object(out)
    }

    fn transform_item(&self, item: &Item) -> Value {
        self.entity(item, None)
    }
}
