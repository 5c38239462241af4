//! Read-modify-write of a single source file

use super::folder::FolderClass;
use crate::error::{RewriteError, RewriteResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A source file loaded in full
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    /// Read the whole file. A path that does not exist maps to
    /// `MissingFile`, any other failure to `FileRead`.
    pub fn read(path: &Path) -> RewriteResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RewriteError::MissingFile {
                    path: path.to_path_buf(),
                }
            } else {
                RewriteError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn folder_class(&self) -> FolderClass {
        FolderClass::classify(&self.path)
    }

    /// Replace the file on disk with `content`.
    ///
    /// The text goes to a temporary file next to the original which is then
    /// renamed over it, so readers see either the old or the new text.
    pub fn write(&self, content: &str) -> RewriteResult<()> {
        let write_error = |source: std::io::Error| RewriteError::FileWrite {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
        temp.write_all(content.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;

        // Keep the original mode instead of the temp file's 0600
        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_error)?;
        }

        temp.persist(&self.path)
            .map_err(|err| write_error(err.error))?;
        Ok(())
    }
}
