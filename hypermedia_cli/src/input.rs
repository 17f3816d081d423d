//! Loading resource documents from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use hypermedia_api::Resource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// YAML for `.yaml`/`.yml` files, JSON otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

pub fn parse_resource(text: &str, format: DocumentFormat) -> Result<Resource> {
    let resource = match format {
        DocumentFormat::Json => {
            serde_json::from_str(text).context("invalid JSON resource document")?
        }
        DocumentFormat::Yaml => {
            serde_yml::from_str(text).context("invalid YAML resource document")?
        }
    };
    Ok(resource)
}

/// Reads a resource document from `path`, or from stdin when `path` is `-`.
pub fn load_resource(path: &str) -> Result<Resource> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read resource document from stdin")?;
        return parse_resource(&text, DocumentFormat::Json);
    }

    let path = Path::new(path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let resource = parse_resource(&text, DocumentFormat::from_path(path))
        .with_context(|| format!("failed to load {}", path.display()))?;
    tracing::debug!(path = %path.display(), kind = resource.kind(), "loaded resource document");
    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("rooms.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("rooms.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("rooms.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("rooms")), DocumentFormat::Json);
    }

    #[test]
    fn test_parse_yaml_collection() {
        let yaml = r#"
collection:
  name: rooms
  pagination:
    base_url: "https://mud.example.com/rooms"
    current_page: 1
    total_pages: 2
    total_count: 12
  items:
    - href: "https://mud.example.com/rooms/1"
      properties:
        name: Hall
"#;
        let resource = parse_resource(yaml, DocumentFormat::Yaml).unwrap();
        match resource {
            Resource::Collection(collection) => {
                assert_eq!(collection.name.as_deref(), Some("rooms"));
                assert_eq!(collection.items().len(), 1);
                assert_eq!(collection.pagination.unwrap().total_count, 12);
            }
            Resource::Item(_) => panic!("expected a collection"),
        }
    }

    #[test]
    fn test_parse_json_item() {
        let json = r#"{"item": {"properties": {"name": "Hall"}}}"#;
        let resource = parse_resource(json, DocumentFormat::Json).unwrap();
        assert_eq!(resource.kind(), "item");
    }

    #[test]
    fn test_parse_rejects_unknown_root() {
        let json = r#"{"entity": {}}"#;
        assert!(parse_resource(json, DocumentFormat::Json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_resource("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
