//! CLI argument parsing using clap

use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// Browser simulator - replay tab and history command scripts
#[derive(Debug, Parser)]
#[command(name = "browser-sim")]
#[command(
    author,
    version,
    about = "Browser simulator - replay tab and history command scripts",
    long_about = None,
    after_help = "SCRIPT FORMAT:\n  <page count>\n  <position> <url>\n  <description line>\n  ...\n  <command count>\n  <COMMAND> [ARG] ...\n\nCOMMANDS:\n  NEW_TAB                 Open a tab on the home page and switch to it\n  OPEN <TAB_ID>           Switch to a tab by its id\n  NEXT / PREV             Move to the next / previous tab, wrapping around\n  CLOSE                   Close the current tab (tab 0 cannot be closed)\n  PAGE <POSITION>         Load a page from the page table\n  BACKWARD / FORWARD      Move through the current tab's history\n  PRINT                   Print tab ids from the current tab and its page description\n  PRINT_HISTORY <TAB_ID>  Print every url in a tab's history\n\nFailed commands print \"403 Forbidden\".\n\nOUTPUT FORMATS:\n  - human (default)  One line per printed value\n  - json             One JSON object per executed command\n  - quiet            Only failures\n\nENVIRONMENT VARIABLES:\n  BROWSER_SIM_INPUT   Default script path\n  BROWSER_SIM_OUTPUT  Default output path\n  RUST_LOG            Log filter (overrides --verbose)\n\nEXAMPLES:\n  browser-sim\n  browser-sim script.in -O -\n  browser-sim script.in -O results.jsonl -o json"
)]
pub struct Cli {
    /// Script to replay, `-` for stdin (overrides BROWSER_SIM_INPUT, default tema1.in)
    pub input: Option<PathBuf>,

    /// Results file, `-` for stdout (overrides BROWSER_SIM_OUTPUT, default tema1.out)
    #[arg(short = 'O', long = "out")]
    pub out: Option<PathBuf>,

    /// Output format: human (plain lines), json (one object per command), quiet (failures only)
    #[arg(short, long, default_value = "human")]
    pub output: OutputFormat,

    /// Log every command at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

// =============================================================================
// Parse Functions
// =============================================================================

/// Parse command line arguments
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse command line arguments from iterator (for testing)
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

// =============================================================================
// Tests
// =============================================================================
