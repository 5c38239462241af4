//! Import path normalizer for feature-folder source trees

pub mod config;
pub mod error;
pub mod io;
pub mod rewrite;
pub mod walker;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{RewriteError, RewriteResult};
pub use rewrite::{
    CrossReferenceResolver, DepthCorrector, FolderClass, Outcome, Pass, PrefixNormalizer,
    RunReport, Runner, SourceFile,
};
pub use walker::FileWalker;
