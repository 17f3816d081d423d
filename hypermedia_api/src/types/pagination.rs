//! Pagination state and next/prev link synthesis.

use serde::{Deserialize, Serialize};
use url::Url;

use super::Link;
use crate::Error;

/// Page position of a collection within a larger result set.
///
/// Values are trusted: `current_page` is expected to lie in `1..=total_pages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// URL of the collection; its query string is rewritten per page.
    pub base_url: Url,
    /// Page number (1-indexed).
    pub current_page: u64,
    pub total_pages: u64,
    /// Number of items across all pages.
    pub total_count: u64,
}

impl Pagination {
    /// Parses `base_url` and builds the pagination value.
    pub fn new(
        base_url: &str,
        current_page: u64,
        total_pages: u64,
        total_count: u64,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url,
            current_page,
            total_pages,
            total_count,
        })
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    /// Returns `base_url` with its `page` query parameter set to `page`.
    ///
    /// Other query parameters keep their position; a repeated key keeps the
    /// last value seen.
    pub fn page_url(&self, page: u64) -> Url {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, value) in self.base_url.query_pairs() {
            set_pair(&mut pairs, &key, value.into_owned());
        }
        set_pair(&mut pairs, "page", page.to_string());

        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear().extend_pairs(pairs.iter());
        url
    }

    pub fn next_link(&self) -> Link {
        Link::new("next", self.page_url(self.current_page + 1))
    }

    pub fn prev_link(&self) -> Link {
        Link::new("prev", self.page_url(self.current_page.saturating_sub(1)))
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key.to_string(), value)),
    }
}

/// Prepends `next`/`prev` links to `links` according to `pagination`.
///
/// Returns the links unchanged when there is no pagination or only one page.
/// Interior pages produce `[next, prev, ..links]`.
pub fn maybe_paginate(links: &[Link], pagination: Option<&Pagination>) -> Vec<Link> {
    let pagination = match pagination {
        Some(p) if p.has_multiple_pages() => p,
        _ => return links.to_vec(),
    };

    let mut paginated = Vec::with_capacity(links.len() + 2);
    if !pagination.is_last_page() {
        paginated.push(pagination.next_link());
    }
    if !pagination.is_first_page() {
        paginated.push(pagination.prev_link());
    }
    tracing::trace!(
        page = pagination.current_page,
        total_pages = pagination.total_pages,
        added = paginated.len(),
        "synthesized pagination links"
    );
    paginated.extend_from_slice(links);
    paginated
}
