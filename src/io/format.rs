//! Format definitions for CLI output.
//!
//! Provides the JSON envelope used when `--json` is passed.

use crate::error::RewriteError;
use crate::io::exit_code::ExitCode;
use serde::Serialize;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON for tool integration
    Json,
}

impl OutputFormat {
    /// Create format from JSON flag.
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    /// Check if format is JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Standard JSON response format.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T = serde_json::Value>
where
    T: Serialize,
{
    /// Status: "success" or "error"
    pub status: String,

    /// Result code (e.g., "OK", "FILE_WRITE_ERROR")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Actual data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Recovery suggestions (only for errors)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,

    /// Exit code for shell scripts
    pub exit_code: u8,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    /// Create a response carrying `data`, successful or not.
    pub fn with_data(data: T, exit_code: ExitCode, message: &str) -> Self {
        let (status, code) = if exit_code.is_success() {
            ("success", "OK".to_string())
        } else {
            ("error", format!("{exit_code:?}").to_uppercase())
        };

        Self {
            status: status.to_string(),
            code,
            message: message.to_string(),
            data: Some(data),
            suggestions: Vec::new(),
            exit_code: exit_code as u8,
        }
    }
}

impl JsonResponse<serde_json::Value> {
    /// Create an error response from RewriteError.
    pub fn from_error(error: &RewriteError) -> Self {
        Self {
            status: "error".to_string(),
            code: error.status_code(),
            message: error.to_string(),
            data: None,
            suggestions: error
                .recovery_suggestions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exit_code: ExitCode::from_error(error) as u8,
        }
    }
}
