//! Per-tab history stack
//!
//! A LIFO of page snapshots. Each tab owns two: one for going back and
//! one for going forward.

use crate::types::Page;

#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    // top of the stack is the last element
    pages: Vec<Page>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Remove and return the most recent page
    pub fn pop(&mut self) -> Option<Page> {
        self.pages.pop()
    }

    pub fn peek(&self) -> Option<&Page> {
        self.pages.last()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Iterate from the most recent page to the oldest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Page> + ExactSizeIterator {
        self.pages.iter().rev()
    }
}
