//! Output formatting for the browser simulator
//!
//! Turns command responses into the text written to the results file.
//! Supports the plain line format, JSON lines and a failures-only mode.

use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::CommandResponse;

// =============================================================================
// Output Format
// =============================================================================

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain lines, exactly what each command prints (default)
    #[default]
    Human,
    /// One JSON object per command for scripting
    Json,
    /// Quiet mode - only failed commands
    Quiet,
}

// =============================================================================
// Output Formatter
// =============================================================================

/// Formats command responses for the results file
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format and write a command response
    pub fn write_response<W: Write>(&self, out: &mut W, response: &CommandResponse) -> Result<()> {
        let output = self.format_response(response)?;
        out.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Render a response, newline terminated; empty when nothing is printed
    fn format_response(&self, response: &CommandResponse) -> Result<String> {
        let output = match self.format {
            OutputFormat::Human => format_lines(&response.lines),
            OutputFormat::Json => {
                let mut json = serde_json::to_string(response)?;
                json.push('\n');
                json
            }
            OutputFormat::Quiet if !response.success => format_lines(&response.lines),
            OutputFormat::Quiet => String::new(),
        };
        Ok(output)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn format_lines(lines: &[String]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrowserError;
    use crate::types::Command;

    fn printed() -> CommandResponse {
        CommandResponse::ok(
            &Command::Print,
            vec!["0 1".to_string(), "desc1".to_string()],
        )
    }

    fn forbidden() -> CommandResponse {
        CommandResponse::forbidden(&Command::Open(99), &BrowserError::TabNotFound(99))
    }

    #[test]
    fn output_formatter_new_stores_format() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        assert_eq!(formatter.format(), OutputFormat::Json);
    }

    #[test]
    fn format_human_writes_each_line() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        assert_eq!(formatter.format_response(&printed()).unwrap(), "0 1\ndesc1\n");
        assert_eq!(
            formatter.format_response(&forbidden()).unwrap(),
            "403 Forbidden\n"
        );
    }

    #[test]
    fn format_human_silent_command_writes_nothing() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let response = CommandResponse::ok(&Command::NewTab, Vec::new());
        assert_eq!(formatter.format_response(&response).unwrap(), "");
    }

    #[test]
    fn format_json_is_one_object_per_line() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format_response(&forbidden()).unwrap();

        assert!(output.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["command"], "OPEN");
        assert_eq!(value["argument"], 99);
        assert_eq!(value["success"], false);
        assert_eq!(value["lines"][0], "403 Forbidden");
        assert_eq!(value["error"], "no tab with id 99");
    }

    #[test]
    fn format_json_omits_missing_fields() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format_response(&printed()).unwrap();
        assert!(!output.contains("argument"));
        assert!(!output.contains("error"));
        assert!(output.contains("\"success\":true"));
    }

    #[test]
    fn format_quiet_keeps_only_failures() {
        let formatter = OutputFormatter::new(OutputFormat::Quiet);
        assert_eq!(formatter.format_response(&printed()).unwrap(), "");
        assert_eq!(
            formatter.format_response(&forbidden()).unwrap(),
            "403 Forbidden\n"
        );
    }

    #[test]
    fn write_response_appends_to_writer() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let mut out = Vec::new();
        formatter.write_response(&mut out, &printed()).unwrap();
        formatter.write_response(&mut out, &forbidden()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 1\ndesc1\n403 Forbidden\n");
    }
}
