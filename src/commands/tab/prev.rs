use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;

#[derive(Default)]
pub struct TabPrevCommand {}

impl Execute for TabPrevCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.prev()?;
        Ok(Vec::new())
    }
}
