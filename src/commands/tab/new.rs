use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;

#[derive(Default)]
pub struct TabNewCommand {}

impl Execute for TabNewCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        let id = ctx.allocate_tab_id();
        ctx.browser.new_tab(id);
        Ok(Vec::new())
    }
}
