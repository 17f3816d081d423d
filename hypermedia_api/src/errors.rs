//! Error types for the rendering engine.

/// Errors that can occur when building or rendering resources.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The requested dialect is not one of the supported identifiers.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    /// A pagination base URL could not be parsed.
    #[error("Invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
