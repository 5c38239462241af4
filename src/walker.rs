//! File system walker for discovering source files to rewrite
//!
//! This module provides directory traversal with support for:
//! - .gitignore rules
//! - Extension filtering from configuration
//! - Hidden file handling
//! - Skipping folder aggregator files

use crate::Settings;
use crate::rewrite::folder::is_aggregator_file;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Walks directories to find source files to rewrite
#[derive(Debug)]
pub struct FileWalker {
    settings: Arc<Settings>,
}

impl FileWalker {
    /// Create a new file walker with the given settings
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Walk a directory and return an iterator of files to rewrite,
    /// in file-name order
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = PathBuf> {
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false)
            .max_depth(None)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        builder.add_custom_ignore_filename(".importnormignore");

        let extension = self.settings.paths.extension.trim_start_matches('.').to_string();

        builder
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(move |entry| {
                let path = entry.path();

                // Skip hidden files (files starting with .)
                let name = path.file_name()?.to_str()?;
                if name.starts_with('.') {
                    return None;
                }

                if path.extension()?.to_str()? != extension {
                    return None;
                }

                if is_aggregator_file(path) {
                    return None;
                }

                Some(path.to_path_buf())
            })
    }
}
