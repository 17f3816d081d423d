//! Multi-dialect hypermedia rendering.
//!
//! Callers build a [`types::Collection`] or [`types::Item`] tree from their own
//! data and hand it to [`transform`] together with a dialect identifier. The
//! result is a plain [`serde_json::Value`] ready for any JSON encoder.

pub mod adapters;
mod dialect;
mod errors;
pub mod types;
pub use self::adapters::{
    Adapter, CollectionJsonAdapter, HalAdapter, JsonAdapter, MasonAdapter, SirenAdapter,
};
pub use self::dialect::{is_supported_dialect, transform, Dialect, SUPPORTED_DIALECTS};
pub use self::errors::Error;
pub use self::types::{maybe_paginate, Collection, Item, Link, Pagination, Resource};
