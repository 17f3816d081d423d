//! Dialect adapters: one [`Adapter`] implementation per hypermedia format.

use serde_json::Value;

use crate::types::{Collection, Item, Resource};

mod links;

mod json;
pub use self::json::JsonAdapter;

mod collection_json;
pub use self::collection_json::CollectionJsonAdapter;

mod hal;
pub use self::hal::HalAdapter;

mod siren;
pub use self::siren::SirenAdapter;

mod mason;
pub use self::mason::MasonAdapter;

/// Converts resources into the plain value tree of one dialect.
///
/// Implementations are stateless; every call builds a fresh value.
pub trait Adapter {
    fn transform_collection(&self, collection: &Collection) -> Value;

    fn transform_item(&self, item: &Item) -> Value;

    fn transform(&self, resource: &Resource) -> Value {
        match resource {
            Resource::Collection(collection) => self.transform_collection(collection),
            Resource::Item(item) => self.transform_item(item),
        }
    }
}
