//! Configuration for the browser simulator
//!
//! Handles configuration loading from environment variables and defaults.

use std::path::PathBuf;

// =============================================================================
// Constants
// =============================================================================

/// Script read when no input is given
pub const DEFAULT_INPUT_PATH: &str = "tema1.in";

/// Results file written when no output is given
pub const DEFAULT_OUTPUT_PATH: &str = "tema1.out";

/// Path that stands for stdin (input) or stdout (output)
pub const STDIO_PATH: &str = "-";

/// Environment variable for the script path
pub const ENV_INPUT_PATH: &str = "BROWSER_SIM_INPUT";

/// Environment variable for the results path
pub const ENV_OUTPUT_PATH: &str = "BROWSER_SIM_OUTPUT";

// =============================================================================
// Config Struct
// =============================================================================

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Script to replay
    pub input_path: PathBuf,

    /// Where command output goes
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_INPUT_PATH) {
            config.input_path = PathBuf::from(path);
        }

        if let Some(path) = lookup(ENV_OUTPUT_PATH) {
            config.output_path = PathBuf::from(path);
        }

        config
    }

    /// Apply explicit command line paths on top of this config
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        self
    }

    pub fn reads_stdin(&self) -> bool {
        self.input_path.as_os_str() == STDIO_PATH
    }

    pub fn writes_stdout(&self) -> bool {
        self.output_path.as_os_str() == STDIO_PATH
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Load the global configuration
pub fn load_config() -> Config {
    Config::from_env()
}

// =============================================================================
// Tests
// =============================================================================
