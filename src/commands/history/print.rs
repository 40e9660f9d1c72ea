use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;
use crate::types::TabId;

/// Forward urls (farthest first), the current url, then backward urls
pub struct PrintHistoryCommand {
    pub tab_id: TabId,
}

impl PrintHistoryCommand {
    pub fn new(tab_id: TabId) -> Self {
        Self { tab_id }
    }
}

impl Execute for PrintHistoryCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.print_history(self.tab_id)
    }
}
