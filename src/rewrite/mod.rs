//! Import rewrite engine
//!
//! Three passes share the same shape: take a file's path and text, return the
//! rewritten text. [`Runner`] drives a pass over a directory tree or an
//! explicit file list, one read-modify-write at a time, and reports what
//! happened to each file.
//!
//! Every pass is idempotent and ends with [`dedup::dedup_imports`], so the
//! passes can be re-run in any number of separate invocations.

pub mod crossref;
pub mod dedup;
pub mod depth;
pub mod folder;
pub mod import;
pub mod prefix;
pub mod source;

pub use crossref::{CROSS_REFERENCES, CrossReference, CrossReferenceResolver, Scope};
pub use depth::DepthCorrector;
pub use folder::{Depth, FolderClass, Layout, SharedModule};
pub use import::{ImportLine, ImportTarget};
pub use prefix::PrefixNormalizer;
pub use source::SourceFile;

use crate::error::{RewriteError, RewriteResult};
use crate::walker::FileWalker;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A text transformation applied to one file at a time
pub trait Pass {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Rewrite the text of the file at `path`
    fn rewrite(&self, path: &Path, text: &str) -> String;
}

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Imports were rewritten
    Fixed,
    /// Already in canonical form
    Unchanged,
    /// Listed file that does not exist
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub folder: FolderClass,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub status: String,
    pub message: String,
}

/// Result of running one pass
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub pass: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub failures: Vec<FailedFile>,
}

impl RunReport {
    fn new(pass: &dyn Pass, dry_run: bool) -> Self {
        Self {
            pass: pass.name().to_string(),
            dry_run,
            files: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, report: FileReport, on_file: &mut impl FnMut(&FileReport)) {
        on_file(&report);
        self.files.push(report);
    }

    fn record_failure(&mut self, path: &Path, error: &RewriteError) {
        warn!("Failed to rewrite {}: {error}", path.display());
        self.failures.push(FailedFile {
            path: path.to_path_buf(),
            status: error.status_code(),
            message: error.to_string(),
        });
    }
}

/// Drives passes over files
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    dry_run: bool,
}

impl Runner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Read, rewrite and write back one file.
    ///
    /// The file is only written when its text changed, and only after the
    /// whole rewrite succeeded.
    pub fn process_file(&self, pass: &dyn Pass, path: &Path) -> RewriteResult<Outcome> {
        let file = SourceFile::read(path)?;
        let rewritten = pass.rewrite(path, file.content());

        if rewritten == file.content() {
            debug!("{}: {} unchanged", pass.name(), path.display());
            return Ok(Outcome::Unchanged);
        }

        if !self.dry_run {
            file.write(&rewritten)?;
        }
        info!(
            "{}: rewrote {} ({})",
            pass.name(),
            path.display(),
            file.folder_class()
        );
        Ok(Outcome::Fixed)
    }

    /// Run a pass over every matching file under `root`.
    ///
    /// A file that fails to read or write is recorded and the run moves on;
    /// files already rewritten stay rewritten.
    pub fn run_tree(
        &self,
        pass: &dyn Pass,
        walker: &FileWalker,
        root: &Path,
        mut on_file: impl FnMut(&FileReport),
    ) -> RewriteResult<RunReport> {
        if !root.is_dir() {
            return Err(RewriteError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }

        // Collect first so temp files from writes never show up in the walk
        let paths: Vec<PathBuf> = walker.walk(root).collect();
        debug!("{}: {} files under {}", pass.name(), paths.len(), root.display());

        let mut report = RunReport::new(pass, self.dry_run);
        for path in paths {
            match self.process_file(pass, &path) {
                Ok(outcome) => report.record(file_report(path, outcome), &mut on_file),
                Err(err) => report.record_failure(&path, &err),
            }
        }
        Ok(report)
    }

    /// Run a pass over an explicit file list. Missing entries are skipped.
    pub fn run_files(
        &self,
        pass: &dyn Pass,
        files: &[PathBuf],
        mut on_file: impl FnMut(&FileReport),
    ) -> RunReport {
        let mut report = RunReport::new(pass, self.dry_run);
        for path in files {
            match self.process_file(pass, path) {
                Ok(outcome) => report.record(file_report(path.clone(), outcome), &mut on_file),
                Err(err) if err.is_skippable() => {
                    warn!("{}: skipping {}: {err}", pass.name(), path.display());
                    report.record(file_report(path.clone(), Outcome::Skipped), &mut on_file);
                }
                Err(err) => report.record_failure(path, &err),
            }
        }
        report
    }
}

fn file_report(path: PathBuf, outcome: Outcome) -> FileReport {
    FileReport {
        folder: FolderClass::classify(&path),
        path,
        outcome,
    }
}
