//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - every file was rewritten or already normalized
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::RewriteError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// A root or listed file was not found (code 3)
    NotFound = 3,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `RewriteError` to the appropriate exit code.
    pub fn from_error(error: &RewriteError) -> Self {
        match error {
            RewriteError::MissingFile { .. } | RewriteError::InvalidRoot { .. } => {
                ExitCode::NotFound
            }
            RewriteError::FileRead { .. } | RewriteError::FileWrite { .. } => ExitCode::IoError,
            RewriteError::ConfigError { .. } => ExitCode::ConfigError,
        }
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}
