use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;

#[derive(Default)]
pub struct TabCloseCommand {}

impl Execute for TabCloseCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.close()?;
        Ok(Vec::new())
    }
}
