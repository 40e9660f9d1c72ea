use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;

#[derive(Default)]
pub struct ForwardCommand {}

impl Execute for ForwardCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.forward()?;
        Ok(Vec::new())
    }
}
