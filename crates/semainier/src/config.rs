//! Configuration for the semainier report generator
//!
//! This module provides the CLI surface: the repository to report on, the
//! report output path, the report window and logging options.

use std::path::PathBuf;

use clap::Parser;

/// Semainier - weekly git commit report, rendered to PDF
#[derive(Parser, Debug, Clone)]
#[command(name = "semainier")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository to report on
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, env = "SEMAINIER_REPO")]
    pub repo: Option<PathBuf>,

    /// Path of the PDF report to write
    ///
    /// Any existing file at this location is overwritten.
    /// Defaults to commits_report.pdf in the current directory.
    #[arg(short, long, env = "SEMAINIER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Length of the report window, in days
    #[arg(long, default_value = "7")]
    pub days: u32,

    /// Directory containing the LiberationSans TTF family
    ///
    /// Checked before the user and system font locations.
    #[arg(long, env = "SEMAINIER_FONTS")]
    pub fonts: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so the confirmation message on stdout
    /// stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the repository path, using the current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the report output path, using a default if not specified
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("commits_report.pdf"))
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The report window is zero days long
    /// - The fonts directory is specified but doesn't exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if let Some(ref fonts) = self.fonts {
            if !fonts.is_dir() {
                return Err(ConfigError::FontsDirNotFound(fonts.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Report window must cover at least one day
    #[error("Report window must cover at least one day")]
    EmptyWindow,

    /// Fonts directory not found
    #[error("Fonts directory not found: {0}")]
    FontsDirNotFound(PathBuf),
}
