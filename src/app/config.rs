//! Application configuration
//!
//! Process-wide settings taken from global command-line flags.

use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Suppress progress bars and informational logs
    pub quiet: bool,
    /// Working directory, searched for `racedb.toml`
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8, quiet: bool) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            quiet,
            working_dir,
        })
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether progress bars should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            quiet: false,
            working_dir: PathBuf::from("."),
        }
    }
}
