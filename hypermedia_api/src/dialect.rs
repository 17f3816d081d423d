//! Dialect selection: the closed set of supported formats and dispatch to their adapters.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::adapters::{
    Adapter, CollectionJsonAdapter, HalAdapter, JsonAdapter, MasonAdapter, SirenAdapter,
};
use crate::types::Resource;
use crate::Error;

/// Identifiers accepted by [`transform`] and [`Dialect::from_str`].
pub const SUPPORTED_DIALECTS: [&str; 5] = ["json", "collection", "hal", "siren", "mason"];

/// Returns true if `dialect` is one of [`SUPPORTED_DIALECTS`].
///
/// Lets a boundary layer reject a request before building any resources.
pub fn is_supported_dialect(dialect: &str) -> bool {
    SUPPORTED_DIALECTS.contains(&dialect)
}

/// A supported hypermedia format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Plain JSON with a flat link list.
    Json,
    /// Collection+JSON.
    CollectionJson,
    Hal,
    Siren,
    Mason,
}

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Json,
        Dialect::CollectionJson,
        Dialect::Hal,
        Dialect::Siren,
        Dialect::Mason,
    ];

    /// The identifier this dialect is selected by.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Json => "json",
            Dialect::CollectionJson => "collection",
            Dialect::Hal => "hal",
            Dialect::Siren => "siren",
            Dialect::Mason => "mason",
        }
    }

    /// Registered media type for responses in this dialect.
    pub fn media_type(&self) -> &'static str {
        match self {
            Dialect::Json => "application/json",
            Dialect::CollectionJson => "application/vnd.collection+json",
            Dialect::Hal => "application/hal+json",
            Dialect::Siren => "application/vnd.siren+json",
            Dialect::Mason => "application/vnd.mason+json",
        }
    }

    /// Maps a media type (parameters ignored) back to its dialect.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|d| d.media_type().eq_ignore_ascii_case(essence))
    }

    /// The adapter that renders this dialect.
    pub fn adapter(&self) -> &'static dyn Adapter {
        match self {
            Dialect::Json => &JsonAdapter,
            Dialect::CollectionJson => &CollectionJsonAdapter,
            Dialect::Hal => &HalAdapter,
            Dialect::Siren => &SirenAdapter,
            Dialect::Mason => &MasonAdapter,
        }
    }

    /// Renders `resource` with this dialect's adapter.
    pub fn transform(&self, resource: &Resource) -> Value {
        tracing::debug!(dialect = self.as_str(), kind = resource.kind(), "rendering resource");
        self.adapter().transform(resource)
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Dialect::Json),
            "collection" => Ok(Dialect::CollectionJson),
            "hal" => Ok(Dialect::Hal),
            "siren" => Ok(Dialect::Siren),
            "mason" => Ok(Dialect::Mason),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `resource` in the dialect named by `dialect`.
///
/// Fails with [`Error::UnsupportedFormat`] before any rendering if the
/// identifier is unknown.
pub fn transform(resource: &Resource, dialect: &str) -> Result<Value, Error> {
    let dialect = dialect
        .parse::<Dialect>()
        .inspect_err(|_| tracing::warn!("Rejected dialect {:?}", dialect))?;
    Ok(dialect.transform(resource))
}
