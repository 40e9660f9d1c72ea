use crate::commands::{CommandContext, Execute};
use crate::error::BrowserResult;

/// Tab ids from the current tab around the ring, then the current page
#[derive(Default)]
pub struct TabListCommand {}

impl Execute for TabListCommand {
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>> {
        ctx.browser.print()
    }
}
