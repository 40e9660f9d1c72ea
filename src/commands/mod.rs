//! Command implementations for the browser simulator
//!
//! Each command module handles:
//! - Validating its argument against the browser state
//! - Applying the operation to the current tab or the ring
//! - Producing the lines the command prints

pub mod history;
pub mod navigate;
pub mod tab;

pub use history::back::BackCommand;
pub use history::forward::ForwardCommand;
pub use history::print::PrintHistoryCommand;
pub use navigate::NavigateCommand;
pub use tab::close::TabCloseCommand;
pub use tab::list::TabListCommand;
pub use tab::new::TabNewCommand;
pub use tab::next::TabNextCommand;
pub use tab::open::TabOpenCommand;
pub use tab::prev::TabPrevCommand;

use crate::browser::Browser;
use crate::error::BrowserResult;
use crate::pages::PageStore;
use crate::types::{Command, CommandResponse, HOME_TAB_ID, TabId};

pub trait Execute {
    /// Apply the command, returning the lines it prints on success
    fn execute(&self, ctx: &mut CommandContext) -> BrowserResult<Vec<String>>;
}

pub struct CommandContext {
    pub browser: Browser,
    pub pages: PageStore,
    last_tab_id: TabId,
}

impl CommandContext {
    pub fn new(pages: PageStore) -> Self {
        Self {
            browser: Browser::new(),
            pages,
            last_tab_id: HOME_TAB_ID,
        }
    }

    /// Next id for a new tab; ids are never reused, even after a close
    pub fn allocate_tab_id(&mut self) -> TabId {
        self.last_tab_id += 1;
        self.last_tab_id
    }

    pub fn execute(&mut self, command: &Command) -> CommandResponse {
        let result = match *command {
            Command::NewTab => TabNewCommand::default().execute(self),
            Command::Open(tab_id) => TabOpenCommand::new(tab_id).execute(self),
            Command::Next => TabNextCommand::default().execute(self),
            Command::Prev => TabPrevCommand::default().execute(self),
            Command::Close => TabCloseCommand::default().execute(self),
            Command::Print => TabListCommand::default().execute(self),
            Command::Page(position) => NavigateCommand::new(position).execute(self),
            Command::Backward => BackCommand::default().execute(self),
            Command::Forward => ForwardCommand::default().execute(self),
            Command::PrintHistory(tab_id) => PrintHistoryCommand::new(tab_id).execute(self),
        };

        match result {
            Ok(lines) => CommandResponse::ok(command, lines),
            Err(err) => {
                log::debug!("{command} forbidden: {err}");
                CommandResponse::forbidden(command, &err)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
