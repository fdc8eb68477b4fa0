// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::matches::PAGE,
    &pages::commentators::PAGE,
    &pages::breakdowns::PAGE,
    &pages::podcast::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Out-of-range indices fall back to the first page.
pub fn page_at(index: usize) -> &'static dyn Page {
    PAGES.get(index).copied().unwrap_or(PAGES[0])
}
