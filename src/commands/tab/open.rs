use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;
use crate::types::TabId;

pub struct TabOpenCommand {
    pub tab_id: TabId,
}

impl TabOpenCommand {
    pub fn new(tab_id: TabId) -> Self {
        Self { tab_id }
    }
}

impl Execute for TabOpenCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.open(self.tab_id)?;
        Ok(Vec::new())
    }
}
