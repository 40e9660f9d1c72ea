//! Script parsing
//!
//! A script is the page table followed by the command list:
//!
//! ```text
//! 2
//! 1 http://x
//! desc1
//! 2 http://y
//! desc2
//! 3
//! NEW_TAB PAGE 1 PRINT
//! ```
//!
//! Each page record is a position and url on one line (anything after the
//! url is ignored) and the description on the whole next line. Commands
//! are whitespace delimited; `OPEN`, `PAGE` and `PRINT_HISTORY` take the
//! following token as their argument.

use std::str::FromStr;

use crate::error::{CliError, Result};
use crate::pages::{MAX_PAGES, PageStore};
use crate::types::{Command, PageId};

/// A parsed script, ready to replay
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub pages: PageStore,
    pub commands: Vec<Command>,
}

impl FromStr for Script {
    type Err = CliError;

    fn from_str(text: &str) -> Result<Self> {
        parse(text)
    }
}

/// Parse a whole script
pub fn parse(text: &str) -> Result<Script> {
    let mut scanner = Scanner::new(text);

    let page_count: usize = scanner.expect_number("page count")?;
    let mut pages = PageStore::new();
    for _ in 0..page_count {
        let position: PageId = scanner.expect_number("page position")?;
        let line = scanner.line;
        let url = scanner.expect_token("page url")?;
        scanner.skip_line();
        let description = scanner
            .next_line()
            .ok_or_else(|| CliError::invalid_input(scanner.line, "missing page description"))?;

        if !pages.insert(position, url, description) {
            return Err(CliError::invalid_input(
                line,
                format!("page position {position} is outside 1..={MAX_PAGES}"),
            ));
        }
    }

    let command_count: usize = scanner.expect_number("command count")?;
    let mut commands = Vec::new();
    for _ in 0..command_count {
        let line = scanner.line;
        let keyword = scanner.expect_token("command")?;
        match parse_command(keyword, &mut scanner)? {
            Some(command) => commands.push(command),
            None => log::warn!("line {line}: skipping unknown command {keyword:?}"),
        }
    }

    if let Some(extra) = scanner.next_token() {
        log::warn!(
            "line {}: ignoring trailing input starting at {extra:?}",
            scanner.line
        );
    }

    Ok(Script { pages, commands })
}

fn parse_command(keyword: &str, scanner: &mut Scanner<'_>) -> Result<Option<Command>> {
    let command = match keyword {
        "NEW_TAB" => Command::NewTab,
        "OPEN" => Command::Open(scanner.expect_number("tab id")?),
        "NEXT" => Command::Next,
        "PREV" => Command::Prev,
        "PAGE" => Command::Page(scanner.expect_number("page position")?),
        "BACKWARD" => Command::Backward,
        "FORWARD" => Command::Forward,
        "CLOSE" => Command::Close,
        "PRINT" => Command::Print,
        "PRINT_HISTORY" => Command::PrintHistory(scanner.expect_number("tab id")?),
        _ => return Ok(None),
    };
    Ok(Some(command))
}

// =============================================================================
// Scanner
// =============================================================================

/// Token and line reader over script text, tracking the 1-based line number
struct Scanner<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            line: 1,
        }
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let (taken, rest) = self.rest.split_at(len);
        self.line += taken.matches('\n').count();
        self.rest = rest;
        taken
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let skip = self
            .rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.rest.len());
        self.advance(skip);
        if self.rest.is_empty() {
            return None;
        }

        let len = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        Some(self.advance(len))
    }

    fn expect_token(&mut self, what: &str) -> Result<&'a str> {
        self.next_token()
            .ok_or_else(|| CliError::invalid_input(self.line, format!("expected {what}")))
    }

    fn expect_number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.expect_token(what)?;
        token.parse().map_err(|_| {
            CliError::invalid_input(self.line, format!("expected {what}, found {token:?}"))
        })
    }

    /// Drop everything up to and including the next newline
    fn skip_line(&mut self) {
        let len = self.rest.find('\n').map_or(self.rest.len(), |i| i + 1);
        self.advance(len);
    }

    /// The next whole line without its line ending
    fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let len = self.rest.find('\n').map_or(self.rest.len(), |i| i + 1);
        let line = self.advance(len);
        Some(line.trim_end_matches(['\n', '\r']))
    }
}

// =============================================================================
// Tests
// =============================================================================
