use anyhow::Result;
use clap::Args;
use hypermedia_api::{maybe_paginate, Resource};

use crate::input::load_resource;
use crate::output::{print_links, OutputFormat};

#[derive(Args)]
pub struct LinksArgs {
    /// Resource document (JSON or YAML), or - for stdin
    pub file: String,
}

pub fn run(args: &LinksArgs, format: &OutputFormat) -> Result<()> {
    let links = match load_resource(&args.file)? {
        Resource::Collection(collection) => {
            maybe_paginate(&collection.links, collection.pagination.as_ref())
        }
        Resource::Item(item) => item.links,
    };
    print_links(&links, format)
}
