use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;

#[derive(Default)]
pub struct TabNextCommand {}

impl Execute for TabNextCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.next()?;
        Ok(Vec::new())
    }
}
