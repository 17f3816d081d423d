mod link;
pub use self::link::Link;

mod pagination;
pub use self::pagination::{maybe_paginate, Pagination};

mod item;
pub use self::item::{Item, Properties};

mod collection;
pub use self::collection::Collection;

mod resource;
pub use self::resource::Resource;
