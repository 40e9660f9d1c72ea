//! Shared value types for the browser simulator
//!
//! Pages, commands and per-command responses. Pages are plain values:
//! moving one between a tab and a history stack always moves or clones
//! the whole value, never a reference.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Tab identifier as it appears in command scripts
pub type TabId = i32;

/// Page identifier (1-based slot in the page table, 0 for the home page)
pub type PageId = usize;

/// Id of the tab created with the browser; it can never be closed
pub const HOME_TAB_ID: TabId = 0;

/// Id reserved for the synthetic home page
pub const HOME_PAGE_ID: PageId = 0;

/// Url of the home page every new tab starts on
pub const HOME_PAGE_URL: &str = "https://acs.pub.ro/";

/// Description of the home page every new tab starts on
pub const HOME_PAGE_DESCRIPTION: &str = "Computer Science";

// =============================================================================
// Page
// =============================================================================

/// A snapshot of a web page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub url: String,
    pub description: String,
}

impl Page {
    pub fn new(id: PageId, url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            description: description.into(),
        }
    }

    /// The page every tab opens on
    pub fn home() -> Self {
        Self::new(HOME_PAGE_ID, HOME_PAGE_URL, HOME_PAGE_DESCRIPTION)
    }

    pub fn is_home(&self) -> bool {
        self.id == HOME_PAGE_ID
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Direction of a history move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Backward => write!(f, "backward"),
            Direction::Forward => write!(f, "forward"),
        }
    }
}

/// One command of a browser script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "argument", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    NewTab,
    Open(TabId),
    Next,
    Prev,
    Page(i64),
    Backward,
    Forward,
    Close,
    Print,
    PrintHistory(TabId),
}

impl Command {
    /// Script keyword for this command
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::NewTab => "NEW_TAB",
            Command::Open(_) => "OPEN",
            Command::Next => "NEXT",
            Command::Prev => "PREV",
            Command::Page(_) => "PAGE",
            Command::Backward => "BACKWARD",
            Command::Forward => "FORWARD",
            Command::Close => "CLOSE",
            Command::Print => "PRINT",
            Command::PrintHistory(_) => "PRINT_HISTORY",
        }
    }

    /// Integer argument carried by the command, if any
    pub fn argument(&self) -> Option<i64> {
        match *self {
            Command::Open(id) | Command::PrintHistory(id) => Some(i64::from(id)),
            Command::Page(position) => Some(position),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument() {
            Some(arg) => write!(f, "{} {}", self.keyword(), arg),
            None => write!(f, "{}", self.keyword()),
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Outcome of executing one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<i64>,
    pub success: bool,
    /// Output lines, without trailing newlines
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn ok(command: &Command, lines: Vec<String>) -> Self {
        Self {
            command: command.keyword(),
            argument: command.argument(),
            success: true,
            lines,
            error: None,
        }
    }

    pub fn forbidden(command: &Command, error: &crate::error::BrowserError) -> Self {
        Self {
            command: command.keyword(),
            argument: command.argument(),
            success: false,
            lines: vec![error.status_line().to_string()],
            error: Some(error.to_string()),
        }
    }
}
