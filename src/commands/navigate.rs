use crate::commands::{CommandContext, Execute};
use crate::error::{BrowserError, BrowserResult};

/// Load a page from the page table into the current tab
pub struct NavigateCommand {
    pub position: i64,
}

impl NavigateCommand {
    pub fn new(position: i64) -> Self {
        Self { position }
    }
}

impl Execute for NavigateCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        let page = ctx
            .pages
            .get(self.position)
            .cloned()
            .ok_or(BrowserError::PageNotFound(self.position))?;

        ctx.browser.navigate(page)?;
        Ok(Vec::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
