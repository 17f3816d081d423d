use serde::{Deserialize, Serialize};

use super::{Collection, Item};

/// Anything a dialect adapter can render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Collection(Collection),
    Item(Item),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Collection(_) => "collection",
            Resource::Item(_) => "item",
        }
    }
}

impl From<Collection> for Resource {
    fn from(collection: Collection) -> Self {
        Resource::Collection(collection)
    }
}

impl From<Item> for Resource {
    fn from(item: Item) -> Self {
        Resource::Item(item)
    }
}
