//! Script replay session
//!
//! A session owns one browser and feeds it a script's commands in order,
//! writing each command's output as it goes. Failed commands never stop
//! the replay; only output errors do.

use std::io::Write;

use crate::browser::Browser;
use crate::commands::CommandContext;
use crate::error::Result;
use crate::output::{OutputFormat, OutputFormatter};
use crate::pages::PageStore;
use crate::script::Script;
use crate::types::{Command, CommandResponse};

/// Counters for a finished replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub forbidden: usize,
    pub open_tabs: usize,
}

pub struct Session {
    ctx: CommandContext,
    formatter: OutputFormatter,
    summary: Summary,
}

impl Session {
    pub fn new(pages: PageStore, format: OutputFormat) -> Self {
        Self {
            ctx: CommandContext::new(pages),
            formatter: OutputFormatter::new(format),
            summary: Summary::default(),
        }
    }

    pub fn browser(&self) -> &Browser {
        &self.ctx.browser
    }

    /// Execute one command and write what it prints
    pub fn run_command<W: Write>(
        &mut self,
        command: &Command,
        out: &mut W,
    ) -> Result<CommandResponse> {
        log::debug!("executing {command}");
        let response = self.ctx.execute(command);

        self.summary.executed += 1;
        if !response.success {
            self.summary.forbidden += 1;
        }
        self.formatter.write_response(out, &response)?;
        Ok(response)
    }

    /// Execute every command in order
    pub fn replay<W: Write>(&mut self, commands: &[Command], out: &mut W) -> Result<Summary> {
        for command in commands {
            self.run_command(command, out)?;
        }
        out.flush()?;
        Ok(self.summary())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            open_tabs: self.ctx.browser.ring().len(),
            ..self.summary
        }
    }
}

/// Replay a parsed script from a fresh browser
pub fn replay_script<W: Write>(script: Script, format: OutputFormat, out: &mut W) -> Result<Summary> {
    let Script { pages, commands } = script;
    let mut session = Session::new(pages, format);
    session.replay(&commands, out)
}

// =============================================================================
// Tests
// =============================================================================
