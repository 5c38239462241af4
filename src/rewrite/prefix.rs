//! Path-prefix normalization for shared-module imports
//!
//! Every import of a shared module gets exactly the hop count its file's
//! depth calls for, and plain individual-file imports from a collapsing
//! module are folded into that module's aggregator. Repeated aggregator
//! lines produced by the fold are removed afterwards.
//!
//! Imports carrying a `show`, `hide` or `as` clause name what they pull in,
//! so they keep their file and only get their hops fixed.

use super::Pass;
use super::dedup::dedup_imports;
use super::folder::{Depth, Layout, SharedModule};
use super::import::{ImportTarget, rewrite_targets};
use std::path::Path;

/// Rewrites shared-module imports to their canonical form
#[derive(Debug, Clone)]
pub struct PrefixNormalizer {
    name: &'static str,
    layout: Layout,
}

impl Default for PrefixNormalizer {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl PrefixNormalizer {
    pub fn new(layout: Layout) -> Self {
        Self {
            name: "normalize",
            layout,
        }
    }

    /// Report runs of this normalizer under a different pass name
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

/// Canonical target for a plain import of `file` inside `module`
pub fn canonical_target(module: SharedModule, file: &str, depth: Depth) -> String {
    if module.collapses() {
        module.aggregator_target(depth)
    } else {
        rehop_target(module, file, depth)
    }
}

/// Same file inside `module`, reached with the hops for `depth`
pub fn rehop_target(module: SharedModule, file: &str, depth: Depth) -> String {
    format!("{}{}/{}", depth.prefix(), module.name(), file)
}

impl Pass for PrefixNormalizer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn rewrite(&self, path: &Path, text: &str) -> String {
        let depth = self.layout.depth_for(path);

        let rewritten = rewrite_targets(text, |import| match import.classify() {
            // A module's own files import each other as siblings
            ImportTarget::Shared { module, file, .. } if !module.contains(path) => {
                if import.is_plain() {
                    Some(canonical_target(module, file, depth))
                } else {
                    Some(rehop_target(module, file, depth))
                }
            }
            _ => None,
        });

        dedup_imports(&rewritten)
    }
}
