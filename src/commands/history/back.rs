use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;

#[derive(Default)]
pub struct BackCommand {}

impl Execute for BackCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.backward()?;
        Ok(Vec::new())
    }
}
