//! Output management for CLI commands.
//!
//! Progress lines go out as each file is processed; the run summary (or the
//! whole report in JSON mode) is written once the pass finishes.

use crate::error::RewriteError;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat};
use crate::rewrite::{FileReport, Outcome, RunReport};
use console::style;
use std::io::{self, Write};

/// Manages output formatting and display.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    /// Report one processed file (text mode only).
    pub fn file(&mut self, report: &FileReport) -> io::Result<()> {
        if self.format.is_json() {
            return Ok(());
        }
        match report.outcome {
            Outcome::Fixed => writeln!(self.stdout, "Fixed: {}", report.path.display()),
            Outcome::Skipped => writeln!(
                self.stderr,
                "{} {} (not found)",
                style("Skipped:").yellow(),
                report.path.display()
            ),
            Outcome::Unchanged => Ok(()),
        }
    }

    /// Output the end-of-pass summary and return the exit code.
    pub fn report(&mut self, report: &RunReport) -> io::Result<ExitCode> {
        let exit_code = exit_code_for(std::slice::from_ref(report));

        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::with_data(report, exit_code, &summary_line(report));
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => self.write_summary(report)?,
        }
        Ok(exit_code)
    }

    /// Output the summaries of several passes run back to back.
    ///
    /// JSON mode writes a single document whose `data` lists every report.
    pub fn reports(&mut self, reports: &[RunReport]) -> io::Result<ExitCode> {
        let exit_code = exit_code_for(reports);

        match self.format {
            OutputFormat::Json => {
                let message = reports
                    .iter()
                    .map(summary_line)
                    .collect::<Vec<_>>()
                    .join("; ");
                let response = JsonResponse::with_data(reports, exit_code, &message);
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                for report in reports {
                    self.write_summary(report)?;
                }
            }
        }
        Ok(exit_code)
    }

    fn write_summary(&mut self, report: &RunReport) -> io::Result<()> {
        for failure in &report.failures {
            writeln!(self.stderr, "{} {}", style("Failed:").red(), failure.message)?;
        }
        writeln!(self.stdout, "{}", summary_line(report))
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &RewriteError) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "Error: {error}")?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        Ok(ExitCode::from_error(error))
    }
}

fn exit_code_for(reports: &[RunReport]) -> ExitCode {
    if reports.iter().all(RunReport::is_success) {
        ExitCode::Success
    } else {
        ExitCode::IoError
    }
}

fn summary_line(report: &RunReport) -> String {
    let verb = if report.dry_run { "would fix" } else { "fixed" };
    format!(
        "{}: {} {verb}, {} unchanged, {} skipped, {} failed",
        report.pass,
        report.count(Outcome::Fixed),
        report.count(Outcome::Unchanged),
        report.count(Outcome::Skipped),
        report.failures.len()
    )
}
