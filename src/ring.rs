//! Circular tab ring
//!
//! Tabs live in an arena keyed by [`TabHandle`]; a separate vector of
//! handles gives the ring order. Handles stay valid while their tab is in
//! the ring no matter how the order changes around them, so callers can
//! hold on to a tab by identity rather than by position.

use std::collections::HashMap;

use crate::tab::Tab;
use crate::types::TabId;

/// Stable reference to a tab stored in a [`TabRing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabHandle(u64);

#[derive(Debug, Default)]
pub struct TabRing {
    tabs: HashMap<TabHandle, Tab>,
    order: Vec<TabHandle>,
    next_handle: u64,
}

impl TabRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert `tab` so that it ends up at `position` in ring order.
    ///
    /// Positions past the end append.
    pub fn insert(&mut self, position: usize, tab: Tab) -> TabHandle {
        let handle = TabHandle(self.next_handle);
        self.next_handle += 1;

        let position = position.min(self.order.len());
        self.tabs.insert(handle, tab);
        self.order.insert(position, handle);
        handle
    }

    pub fn push_back(&mut self, tab: Tab) -> TabHandle {
        self.insert(self.order.len(), tab)
    }

    /// Detach the tab at `position`, wrapping positions past the end.
    pub fn remove(&mut self, position: usize) -> Option<Tab> {
        if self.order.is_empty() {
            return None;
        }
        let handle = self.order.remove(position % self.order.len());
        self.tabs.remove(&handle)
    }

    /// First tab in ring order with the given id
    pub fn find_by_id(&self, id: TabId) -> Option<TabHandle> {
        self.order
            .iter()
            .copied()
            .find(|handle| self.tabs.get(handle).is_some_and(|tab| tab.id() == id))
    }

    pub fn position_of(&self, handle: TabHandle) -> Option<usize> {
        self.order.iter().position(|&h| h == handle)
    }

    pub fn handle_at(&self, position: usize) -> Option<TabHandle> {
        self.order.get(position).copied()
    }

    /// Tab after `handle`, wrapping from the last tab to the first
    pub fn next_of(&self, handle: TabHandle) -> Option<TabHandle> {
        let position = self.position_of(handle)?;
        self.handle_at((position + 1) % self.order.len())
    }

    /// Tab before `handle`, wrapping from the first tab to the last
    pub fn prev_of(&self, handle: TabHandle) -> Option<TabHandle> {
        let position = self.position_of(handle)?;
        let len = self.order.len();
        self.handle_at((position + len - 1) % len)
    }

    pub fn get(&self, handle: TabHandle) -> Option<&Tab> {
        self.tabs.get(&handle)
    }

    pub fn get_mut(&mut self, handle: TabHandle) -> Option<&mut Tab> {
        self.tabs.get_mut(&handle)
    }

    /// Tabs in ring order
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.order.iter().filter_map(move |handle| self.tabs.get(handle))
    }

    /// One full turn of the ring starting at `handle`.
    ///
    /// Yields nothing if `handle` is not in the ring.
    pub fn iter_from(&self, handle: TabHandle) -> impl Iterator<Item = &Tab> {
        let start = self.position_of(handle);
        let len = if start.is_some() { self.order.len() } else { 0 };
        let start = start.unwrap_or(0);

        (0..len)
            .map(move |offset| self.order[(start + offset) % len])
            .filter_map(move |handle| self.tabs.get(&handle))
    }
}
