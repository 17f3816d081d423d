mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "hyperfmt")]
#[command(about = "Render resource documents as JSON, Collection+JSON, HAL, Siren or Mason")]
struct Cli {
    /// Output format: pretty, compact, yaml, table or markdown [env: HYPERFMT_OUTPUT]
    #[arg(long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resource document in a hypermedia dialect
    Render(commands::render::RenderArgs),
    /// List the effective links of a resource document
    Links(commands::links::LinksArgs),
    /// List supported dialects and their media types
    Dialects,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hypermedia=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let format = OutputFormat::parse(cli.output.as_deref().unwrap_or(&config.output));

    match &cli.command {
        Commands::Render(args) => commands::render::run(args, &config, &format)?,
        Commands::Links(args) => commands::links::run(args, &format)?,
        Commands::Dialects => commands::dialects::run(&format)?,
    }

    Ok(())
}
