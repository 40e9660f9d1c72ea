//! Browser state machine
//!
//! Owns the tab ring and the handle of the current tab. Every operation
//! either applies completely or returns a [`BrowserError`] with the state
//! untouched.

use crate::error::{BrowserError, BrowserResult};
use crate::ring::{TabHandle, TabRing};
use crate::tab::Tab;
use crate::types::{HOME_TAB_ID, Page, TabId};

#[derive(Debug)]
pub struct Browser {
    ring: TabRing,
    current: TabHandle,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    /// A browser with tab 0 open on the home page
    pub fn new() -> Self {
        let mut ring = TabRing::new();
        let current = ring.push_back(Tab::new(HOME_TAB_ID));
        Self { ring, current }
    }

    pub fn ring(&self) -> &TabRing {
        &self.ring
    }

    pub fn current_tab(&self) -> BrowserResult<&Tab> {
        self.ring.get(self.current).ok_or(BrowserError::EmptyRing)
    }

    fn current_tab_mut(&mut self) -> BrowserResult<&mut Tab> {
        self.ring.get_mut(self.current).ok_or(BrowserError::EmptyRing)
    }

    /// Append a home-page tab and make it current
    pub fn new_tab(&mut self, id: TabId) {
        self.current = self.ring.push_back(Tab::new(id));
    }

    pub fn open(&mut self, id: TabId) -> BrowserResult<()> {
        self.current = self
            .ring
            .find_by_id(id)
            .ok_or(BrowserError::TabNotFound(id))?;
        Ok(())
    }

    pub fn next(&mut self) -> BrowserResult<()> {
        self.current = self
            .ring
            .next_of(self.current)
            .ok_or(BrowserError::EmptyRing)?;
        Ok(())
    }

    pub fn prev(&mut self) -> BrowserResult<()> {
        self.current = self
            .ring
            .prev_of(self.current)
            .ok_or(BrowserError::EmptyRing)?;
        Ok(())
    }

    /// Close the current tab.
    ///
    /// The tab that preceded it becomes current; closing the first tab in
    /// the ring moves to the new last tab.
    pub fn close(&mut self) -> BrowserResult<()> {
        let tab = self.current_tab()?;
        if tab.is_protected() {
            return Err(BrowserError::ProtectedTab(tab.id()));
        }
        if self.ring.len() < 2 {
            return Err(BrowserError::EmptyRing);
        }

        let position = self
            .ring
            .position_of(self.current)
            .ok_or(BrowserError::EmptyRing)?;
        let closed = self
            .ring
            .remove(position)
            .ok_or(BrowserError::EmptyRing)?;
        log::debug!("closed tab {}", closed.id());

        let successor = match position {
            0 => self.ring.len() - 1,
            _ => position - 1,
        };
        self.current = self
            .ring
            .handle_at(successor)
            .ok_or(BrowserError::EmptyRing)?;
        Ok(())
    }

    /// Load `page` in the current tab
    pub fn navigate(&mut self, page: Page) -> BrowserResult<()> {
        self.current_tab_mut()?.navigate(page);
        Ok(())
    }

    pub fn backward(&mut self) -> BrowserResult<()> {
        self.current_tab_mut()?.go_back()
    }

    pub fn forward(&mut self) -> BrowserResult<()> {
        self.current_tab_mut()?.go_forward()
    }

    /// Tab ids starting at the current tab, then its description
    pub fn print(&self) -> BrowserResult<Vec<String>> {
        let tab = self.current_tab()?;
        let ids = self
            .ring
            .iter_from(self.current)
            .map(|tab| tab.id().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(vec![ids, tab.current_page().description.clone()])
    }

    pub fn print_history(&self, id: TabId) -> BrowserResult<Vec<String>> {
        let handle = self
            .ring
            .find_by_id(id)
            .ok_or(BrowserError::TabNotFound(id))?;
        let tab = self.ring.get(handle).ok_or(BrowserError::TabNotFound(id))?;
        Ok(tab.history_urls())
    }
}
