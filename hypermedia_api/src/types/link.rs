use serde::{Deserialize, Serialize};

/// A single hypermedia relation.
///
/// Several links in one list may share a `rel` (e.g. multiple `item` links);
/// adapters decide how to group them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,

    pub href: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<bool>,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            title: None,
            template: None,
        }
    }

    /// Sets a human-readable title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Marks the href as a URI template.
    pub fn templated(mut self) -> Self {
        self.template = Some(true);
        self
    }

    pub fn is_template(&self) -> bool {
        self.template.unwrap_or(false)
    }

    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel == rel
    }
}

#[cfg(test)]
mod tests {
    use super::Link;

    #[test]
    fn test_link_builder() {
        let link = Link::new("search", "/rooms{?q}")
            .with_title("Search rooms")
            .templated();
        assert_eq!(link.rel, "search");
        assert_eq!(link.title.as_deref(), Some("Search rooms"));
        assert!(link.is_template());
        assert!(link.has_rel("search"));
    }

    #[test]
    fn test_link_deserialize_minimal() {
        let link: Link = serde_json::from_str(r#"{"rel": "self", "href": "/rooms"}"#).unwrap();
        assert_eq!(link, Link::new("self", "/rooms"));
        assert!(!link.is_template());
    }

    #[test]
    fn test_link_serialize_skips_absent_fields() {
        let val = serde_json::to_value(Link::new("next", "/rooms?page=2")).unwrap();
        assert_eq!(val, serde_json::json!({"rel": "next", "href": "/rooms?page=2"}));
    }
}
