//! Error types for the import rewrite engine
//!
//! This module provides structured error types using thiserror so that
//! the CLI can map each failure to an exit code and a recovery hint.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rewrite runs
#[derive(Error, Debug)]
pub enum RewriteError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A listed file does not exist. Callers treat this as a skip.
    #[error("File '{path}' does not exist")]
    MissingFile { path: PathBuf },

    #[error("Root '{path}' is not a directory")]
    InvalidRoot { path: PathBuf },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },
}

impl RewriteError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier used in the JSON run report.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::MissingFile { .. } => "MISSING_FILE",
            Self::InvalidRoot { .. } => "INVALID_ROOT",
            Self::ConfigError { .. } => "CONFIG_ERROR",
        }
        .to_string()
    }

    /// Whether the run should keep going after this error.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is valid UTF-8 text",
            ],
            Self::FileWrite { .. } => vec![
                "Check write permissions on the file and its directory",
                "The original file was left untouched, re-run once fixed",
            ],
            Self::MissingFile { .. } => vec![
                "Update depth.nested_files in .importnorm/settings.toml",
            ],
            Self::InvalidRoot { .. } => vec![
                "Run from the project root or pass the subtree explicitly",
                "Check paths.screens_root and paths.widgets_root in the settings",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'importnorm init --force' to regenerate the settings file",
            ],
        }
    }
}

/// Result type alias for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;
