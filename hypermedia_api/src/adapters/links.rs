//! Link helpers shared by the adapters.

use serde_json::{Map, Value};

use crate::types::Link;

/// Links grouped by rel, rels in first-seen order, links in supplied order.
pub(crate) fn group_by_rel<'a>(
    links: impl IntoIterator<Item = &'a Link>,
) -> Vec<(&'a str, Vec<&'a Link>)> {
    let mut groups: Vec<(&'a str, Vec<&'a Link>)> = Vec::new();
    for link in links {
        match groups.iter_mut().find(|(rel, _)| *rel == link.rel) {
            Some((_, group)) => group.push(link),
            None => groups.push((link.rel.as_str(), vec![link])),
        }
    }
    groups
}

/// Renders links as a map keyed by rel: one link becomes an object, several an array.
pub(crate) fn grouped_object<'a>(
    links: impl IntoIterator<Item = &'a Link>,
    render: impl Fn(&Link) -> Value,
) -> Map<String, Value> {
    group_by_rel(links)
        .into_iter()
        .map(|(rel, group)| {
            let value = match group.as_slice() {
                [single] => render(single),
                many => Value::Array(many.iter().map(|link| render(link)).collect()),
            };
            (rel.to_string(), value)
        })
        .collect()
}

/// Prepends a `self` link to `href` unless one is already present.
pub(crate) fn with_self_link(href: Option<&str>, mut links: Vec<Link>) -> Vec<Link> {
    if let Some(href) = href {
        if !links.iter().any(|link| link.has_rel("self")) {
            links.insert(0, Link::new("self", href));
        }
    }
    links
}

/// The `{rel, href}` shape used by the plain JSON dialect.
pub(crate) fn rel_href(link: &Link) -> Value {
    let mut obj = Map::new();
    obj.insert("rel".to_string(), Value::from(link.rel.as_str()));
    obj.insert("href".to_string(), Value::from(link.href.as_str()));
    Value::Object(obj)
}
