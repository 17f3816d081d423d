use hypermedia_api::{transform, Resource};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Resource {
    let path = workspace_root()
        .join("hypermedia_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is a valid resource document")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn assert_conforms(fixture: &str, dialect: &str, schema: &str) {
    let rendered = transform(&load_fixture(fixture), dialect).unwrap();
    let schema = load_schema(schema);
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    let result = validator.validate(&rendered);
    if let Err(e) = &result {
        panic!("{} rendered as {} failed validation: {e}\n{rendered:#}", fixture, dialect);
    }
}

fn is_valid(schema: &str, value: &Value) -> bool {
    let schema = load_schema(schema);
    jsonschema::draft202012::new(&schema)
        .expect("schema compiles")
        .is_valid(value)
}

// ---------------------------------------------------------------------------
// Positive validation: rendered fixtures conform to their dialect schemas
// ---------------------------------------------------------------------------

#[test]
fn test_json_collection_conforms_to_schema() {
    assert_conforms("rooms.json", "json", "json.schema.json");
    assert_conforms("empty.json", "json", "json.schema.json");
}

#[test]
fn test_collection_json_conforms_to_schema() {
    for fixture in ["rooms.json", "room.json", "empty.json"] {
        assert_conforms(fixture, "collection", "collection.schema.json");
    }
}

#[test]
fn test_hal_conforms_to_schema() {
    for fixture in ["rooms.json", "room.json", "empty.json"] {
        assert_conforms(fixture, "hal", "hal.schema.json");
    }
}

#[test]
fn test_siren_conforms_to_schema() {
    for fixture in ["rooms.json", "room.json", "empty.json"] {
        assert_conforms(fixture, "siren", "siren.schema.json");
    }
}

#[test]
fn test_mason_conforms_to_schema() {
    for fixture in ["rooms.json", "room.json", "empty.json"] {
        assert_conforms(fixture, "mason", "mason.schema.json");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject documents that break dialect rules
// ---------------------------------------------------------------------------

#[test]
fn test_hal_schema_rejects_single_element_link_array() {
    let doc = json!({"_links": {"item": [{"href": "/rooms/1"}]}});
    assert!(!is_valid("hal.schema.json", &doc));
}

#[test]
fn test_collection_schema_rejects_self_link() {
    let doc = json!({
        "collection": {
            "version": "1.0",
            "links": [{"rel": "self", "href": "/rooms"}]
        }
    });
    assert!(!is_valid("collection.schema.json", &doc));
}

#[test]
fn test_collection_schema_rejects_empty_items() {
    let doc = json!({"collection": {"version": "1.0", "items": []}});
    assert!(!is_valid("collection.schema.json", &doc));
}

#[test]
fn test_mason_schema_rejects_curies_control() {
    let doc = json!({"name": "rooms", "@controls": {"curies": {"href": "/rels/{rel}"}}});
    assert!(!is_valid("mason.schema.json", &doc));
}

#[test]
fn test_siren_schema_rejects_bare_string_rel() {
    let doc = json!({"links": [{"rel": "self", "href": "/rooms"}]});
    assert!(!is_valid("siren.schema.json", &doc));
}
