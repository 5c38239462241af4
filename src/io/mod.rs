//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Text and JSON output of run reports
//! - Consistent error handling and exit codes

pub mod exit_code;
pub mod format;
pub mod output;

pub use exit_code::ExitCode;
pub use format::{JsonResponse, OutputFormat};
pub use output::OutputManager;
