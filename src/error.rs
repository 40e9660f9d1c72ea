//! Error types for the browser simulator

use thiserror::Error;

use crate::types::{Direction, TabId};

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Result type alias for browser operations
pub type BrowserResult<T> = std::result::Result<T, BrowserError>;

/// The only line a failed browser operation ever prints
pub const FORBIDDEN: &str = "403 Forbidden";

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Malformed script file
    #[error("invalid input at line {line}: {message}")]
    InvalidInput { line: usize, message: String },

    /// Script or output file could not be opened
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CliError {
    pub fn file_access(path: &std::path::Path, source: std::io::Error) -> Self {
        CliError::FileAccess {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn invalid_input(line: usize, message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            line,
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArguments(_) => 64,   // EX_USAGE
            CliError::InvalidInput { .. } => 65,   // EX_DATAERR
            CliError::FileAccess { .. } => 74,     // EX_IOERR
            CliError::IoError(_) => 74,            // EX_IOERR
            CliError::SerializationError(_) => 65, // EX_DATAERR
        }
    }
}

/// A browser operation whose precondition did not hold.
///
/// Every variant renders to the user as [`FORBIDDEN`]; the message is only
/// used for logs and the JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("no tab with id {0}")]
    TabNotFound(TabId),

    #[error("no page at position {0}")]
    PageNotFound(i64),

    #[error("{0} history is empty")]
    EmptyHistory(Direction),

    #[error("tab {0} cannot be closed")]
    ProtectedTab(TabId),

    #[error("no tabs are open")]
    EmptyRing,
}

impl BrowserError {
    pub fn status_line(&self) -> &'static str {
        FORBIDDEN
    }
}

// =============================================================================
// Tests
// =============================================================================
