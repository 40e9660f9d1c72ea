//! Page record store
//!
//! Known pages loaded from the script, keyed by their 1-based slot.
//! A slot that was never loaded is simply absent.

use std::collections::BTreeMap;

use crate::types::{Page, PageId};

/// Number of slots in the page table
pub const MAX_PAGES: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages: BTreeMap<PageId, Page>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a page record in `position`, replacing any previous record.
    ///
    /// Returns `false` without storing anything when `position` is outside
    /// `1..=MAX_PAGES`.
    pub fn insert(&mut self, position: PageId, url: &str, description: &str) -> bool {
        if !(1..=MAX_PAGES).contains(&position) {
            return false;
        }
        self.pages
            .insert(position, Page::new(position, url, description));
        true
    }

    /// Look up a page by the (possibly negative) position given in a script
    pub fn get(&self, position: i64) -> Option<&Page> {
        let position = PageId::try_from(position).ok()?;
        self.pages.get(&position)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }
}
