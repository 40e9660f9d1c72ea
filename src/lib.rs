//! Browser simulator library
//!
//! Replays scripts of tab and history commands against a simulated
//! browser: a ring of tabs, each with a current page and back/forward
//! history. This module exposes the functionality as a library,
//! allowing for programmatic use and testing.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod output;
pub mod pages;
pub mod ring;
pub mod script;
pub mod session;
pub mod tab;
pub mod types;

// Re-exports for convenience
pub use browser::Browser;
pub use cli::Cli;
pub use config::Config;
pub use error::{BrowserError, CliError, Result};
pub use output::{OutputFormat, OutputFormatter};
pub use script::Script;
pub use session::{Session, Summary};

use std::fs::{self, File};
use std::io::{self, BufWriter, Read};
use std::path::Path;

// =============================================================================
// Main Entry Point
// =============================================================================

/// Run the simulator with parsed arguments
pub fn run(cli: Cli) -> Result<Summary> {
    // 1. Resolve paths: flags, then environment, then defaults
    let config = config::load_config().with_overrides(cli.input, cli.out);
    if !config.reads_stdin()
        && !config.writes_stdout()
        && same_file(&config.input_path, &config.output_path)
    {
        return Err(CliError::InvalidArguments(format!(
            "refusing to overwrite the script {}",
            config.input_path.display()
        )));
    }

    // 2. Load and parse the script
    let text = read_script(&config)?;
    let script: Script = text.parse()?;
    log::info!(
        "loaded {} pages and {} commands from {}",
        script.pages.len(),
        script.commands.len(),
        config.input_path.display()
    );

    // 3. Replay into the results file
    let summary = if config.writes_stdout() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        session::replay_script(script, cli.output, &mut out)?
    } else {
        let file = File::create(&config.output_path)
            .map_err(|e| CliError::file_access(&config.output_path, e))?;
        let mut out = BufWriter::new(file);
        session::replay_script(script, cli.output, &mut out)?
    };

    log::info!(
        "executed {} commands ({} forbidden), {} tabs open",
        summary.executed,
        summary.forbidden,
        summary.open_tabs
    );
    Ok(summary)
}

/// Whether two paths name the same file, resolving `.` and symlinks when both exist
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn read_script(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::file_access(&config.input_path, e))?;
        Ok(text)
    } else {
        fs::read_to_string(&config.input_path)
            .map_err(|e| CliError::file_access(&config.input_path, e))
    }
}

/// Install the logger; `RUST_LOG` wins over the verbosity flag
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Execute the CLI and handle errors
pub fn execute() -> i32 {
    // 1. Parse CLI arguments
    let cli = cli::parse();
    init_logging(cli.verbose);

    // 2. Call run()
    match run(cli) {
        Ok(_) => 0,
        Err(e) => {
            // 3. Handle errors, print to stderr
            eprintln!("Error: {}", e);

            // 4. Return appropriate exit code
            e.exit_code()
        }
    }
}
