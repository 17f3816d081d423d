//! Environment configuration for the CLI.
//!
//! An optional `.env` file is loaded at startup; command-line flags override
//! these values.
//!
//! - `HYPERFMT_DIALECT` - default dialect for `render` (default: `json`)
//! - `HYPERFMT_OUTPUT` - default output format (default: `pretty`)

pub const DEFAULT_DIALECT: &str = "json";
pub const DEFAULT_OUTPUT: &str = "pretty";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dialect identifier, validated only when a render is attempted.
    pub dialect: String,
    pub output: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            dialect: env_string(&lookup, "HYPERFMT_DIALECT", DEFAULT_DIALECT),
            output: env_string(&lookup, "HYPERFMT_OUTPUT", DEFAULT_OUTPUT),
        }
    }
}

fn env_string(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}
