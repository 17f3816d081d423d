use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::input::load_resource;
use crate::output::{print_document, OutputFormat};

#[derive(Args)]
pub struct RenderArgs {
    /// Dialect: json, collection, hal, siren or mason [env: HYPERFMT_DIALECT]
    #[arg(long)]
    pub dialect: Option<String>,

    /// Resource document (JSON or YAML), or - for stdin
    pub file: String,
}

pub fn run(args: &RenderArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let dialect = args.dialect.as_deref().unwrap_or(&config.dialect);
    if !hypermedia_api::is_supported_dialect(dialect) {
        anyhow::bail!(
            "{} (expected one of: {})",
            hypermedia_api::Error::UnsupportedFormat(dialect.to_string()),
            hypermedia_api::SUPPORTED_DIALECTS.join(", ")
        );
    }

    let resource = load_resource(&args.file)?;
    let rendered = hypermedia_api::transform(&resource, dialect)?;
    print_document(&rendered, format)
}
