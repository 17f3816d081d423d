//! CLI subcommand implementations.

pub mod dialects;
pub mod links;
pub mod render;
