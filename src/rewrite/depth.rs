//! Depth correction for the listed nested files
//!
//! Files on the nested list sit one folder deeper than their folder name
//! suggests. This pass moves their one-hop aggregator imports to two hops.
//! Only the exact one-hop form is matched, so a second run finds nothing.

use super::Pass;
use super::dedup::dedup_imports;
use super::folder::{Depth, SharedModule};
use super::import::rewrite_targets;
use std::path::Path;

/// Retargets `../<module>/<aggregator>` imports to `../../<module>/<aggregator>`
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthCorrector;

impl Pass for DepthCorrector {
    fn name(&self) -> &'static str {
        "correct-depth"
    }

    fn rewrite(&self, _path: &Path, text: &str) -> String {
        let rewritten = rewrite_targets(text, |import| {
            SharedModule::ALL
                .into_iter()
                .find(|module| import.target == module.aggregator_target(Depth::One))
                .map(|module| module.aggregator_target(Depth::Two))
        });

        dedup_imports(&rewritten)
    }
}
