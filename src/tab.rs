//! A single browser tab
//!
//! Holds the current page and the two history stacks. Navigation pushes the
//! current page onto the backward stack and drops all forward history.

use crate::error::{BrowserError, BrowserResult};
use crate::history::HistoryStack;
use crate::types::{Direction, HOME_TAB_ID, Page, TabId};

#[derive(Debug, Clone)]
pub struct Tab {
    id: TabId,
    current_page: Page,
    backward: HistoryStack,
    forward: HistoryStack,
}

impl Tab {
    /// Create a tab sitting on the home page with empty history
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            current_page: Page::home(),
            backward: HistoryStack::new(),
            forward: HistoryStack::new(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// Tab 0 is never closed
    pub fn is_protected(&self) -> bool {
        self.id == HOME_TAB_ID
    }

    pub fn current_page(&self) -> &Page {
        &self.current_page
    }

    pub fn backward(&self) -> &HistoryStack {
        &self.backward
    }

    pub fn forward(&self) -> &HistoryStack {
        &self.forward
    }

    /// Load `page`, remembering the current one and dropping forward history
    pub fn navigate(&mut self, page: Page) {
        let previous = std::mem::replace(&mut self.current_page, page);
        self.backward.push(previous);
        self.forward.clear();
    }

    pub fn go_back(&mut self) -> BrowserResult<()> {
        let page = self
            .backward
            .pop()
            .ok_or(BrowserError::EmptyHistory(Direction::Backward))?;
        let previous = std::mem::replace(&mut self.current_page, page);
        self.forward.push(previous);
        Ok(())
    }

    pub fn go_forward(&mut self) -> BrowserResult<()> {
        let page = self
            .forward
            .pop()
            .ok_or(BrowserError::EmptyHistory(Direction::Forward))?;
        let previous = std::mem::replace(&mut self.current_page, page);
        self.backward.push(previous);
        Ok(())
    }

    /// Urls from the farthest forward page down to the oldest backward page
    pub fn history_urls(&self) -> Vec<String> {
        self.forward
            .iter()
            .rev()
            .chain(std::iter::once(&self.current_page))
            .chain(self.backward.iter())
            .map(|page| page.url.clone())
            .collect()
    }
}
