use anyhow::Result;
use hypermedia_api::{Dialect, Link};
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
    Yaml,
    Table,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to pretty JSON.
    pub fn parse(name: &str) -> Self {
        match name {
            "pretty" | "json" => OutputFormat::Pretty,
            "compact" => OutputFormat::Compact,
            "yaml" => OutputFormat::Yaml,
            "table" => OutputFormat::Table,
            "markdown" => OutputFormat::Markdown,
            other => {
                tracing::warn!("Unknown output format {:?}, using pretty JSON", other);
                OutputFormat::Pretty
            }
        }
    }
}

#[derive(Tabled, Serialize)]
struct LinkRow {
    #[tabled(rename = "Rel")]
    #[serde(rename = "Rel")]
    rel: String,
    #[tabled(rename = "Href")]
    #[serde(rename = "Href")]
    href: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Template")]
    #[serde(rename = "Template")]
    template: bool,
}

#[derive(Tabled, Serialize)]
struct DialectRow {
    #[tabled(rename = "Dialect")]
    #[serde(rename = "Dialect")]
    dialect: String,
    #[tabled(rename = "Media Type")]
    #[serde(rename = "Media Type")]
    media_type: String,
}

// -- Row builders --

fn build_link_rows(links: &[Link]) -> Vec<LinkRow> {
    links
        .iter()
        .map(|l| LinkRow {
            rel: l.rel.clone(),
            href: l.href.clone(),
            title: l.title.clone().unwrap_or_default(),
            template: l.is_template(),
        })
        .collect()
}

fn build_dialect_rows() -> Vec<DialectRow> {
    Dialect::ALL
        .iter()
        .map(|d| DialectRow {
            dialect: d.as_str().to_string(),
            media_type: d.media_type().to_string(),
        })
        .collect()
}

// -- Formatting --

/// Formats a rendered document. Table formats do not apply to documents and
/// fall back to pretty JSON.
pub fn format_document(value: &Value, format: &OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Compact => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yml::to_string(value)?,
        OutputFormat::Pretty | OutputFormat::Table | OutputFormat::Markdown => {
            serde_json::to_string_pretty(value)?
        }
    })
}

fn format_rows<T: Tabled + Serialize>(rows: Vec<T>, format: &OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            table.to_string()
        }
        OutputFormat::Pretty => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Compact => serde_json::to_string(&rows)?,
        OutputFormat::Yaml => serde_yml::to_string(&rows)?,
    })
}

pub fn format_links(links: &[Link], format: &OutputFormat) -> Result<String> {
    format_rows(build_link_rows(links), format)
}

pub fn format_dialects(format: &OutputFormat) -> Result<String> {
    format_rows(build_dialect_rows(), format)
}

pub fn print_document(value: &Value, format: &OutputFormat) -> Result<()> {
    println!("{}", format_document(value, format)?);
    Ok(())
}

pub fn print_links(links: &[Link], format: &OutputFormat) -> Result<()> {
    println!("{}", format_links(links, format)?);
    Ok(())
}

pub fn print_dialects(format: &OutputFormat) -> Result<()> {
    println!("{}", format_dialects(format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_links() -> Vec<Link> {
        vec![
            Link::new("self", "https://mud.example.com/rooms"),
            Link::new("search", "https://mud.example.com/rooms{?q}")
                .with_title("Find rooms")
                .templated(),
        ]
    }

    // -- OutputFormat tests --

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("pretty"), OutputFormat::Pretty);
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Pretty);
        assert_eq!(OutputFormat::parse("compact"), OutputFormat::Compact);
        assert_eq!(OutputFormat::parse("yaml"), OutputFormat::Yaml);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Pretty);
    }

    // -- Row builder tests --

    #[test]
    fn test_build_link_rows_mapping() {
        let rows = build_link_rows(&sample_links());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rel, "self");
        assert_eq!(rows[0].title, "");
        assert!(!rows[0].template);
        assert_eq!(rows[1].title, "Find rooms");
        assert!(rows[1].template);
    }

    #[test]
    fn test_build_link_rows_empty() {
        assert!(build_link_rows(&[]).is_empty());
    }

    #[test]
    fn test_build_dialect_rows() {
        let rows = build_dialect_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].dialect, "hal");
        assert_eq!(rows[2].media_type, "application/hal+json");
    }

    // -- Document output tests --

    #[test]
    fn test_format_document_compact() {
        let value = json!({"name": "Hall"});
        assert_eq!(
            format_document(&value, &OutputFormat::Compact).unwrap(),
            r#"{"name":"Hall"}"#
        );
    }

    #[test]
    fn test_format_document_yaml() {
        let value = json!({"name": "Hall"});
        let yaml = format_document(&value, &OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("name: Hall"));
    }

    #[test]
    fn test_format_document_table_falls_back_to_json() {
        let value = json!({"name": "Hall"});
        let out = format_document(&value, &OutputFormat::Table).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, value);
    }

    // -- Table output tests --

    #[test]
    fn test_markdown_links_headers() {
        let md = format_links(&sample_links(), &OutputFormat::Markdown).unwrap();
        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Rel"));
        assert!(header_line.contains("Href"));
        assert!(header_line.contains("Title"));
        assert!(header_line.contains("Template"));
        assert!(md.contains("---"));
    }

    #[test]
    fn test_table_dialects_contains_media_types() {
        let table = format_dialects(&OutputFormat::Table).unwrap();
        for dialect in Dialect::ALL {
            assert!(table.contains(dialect.media_type()));
        }
    }

    #[test]
    fn test_json_links_serializable() {
        let out = format_links(&sample_links(), &OutputFormat::Compact).unwrap();
        let val: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(val[1]["Rel"], "search");
        assert_eq!(val[1]["Template"], true);
    }
}
