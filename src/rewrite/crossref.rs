//! Sibling import resolution
//!
//! Screens reference each other by bare file name. When the target moved to
//! another feature folder, the bare name no longer resolves; the case table
//! below says where each known target lives, conditioned on the importing
//! file. Bare names without a matching case stay same-folder imports.

use super::Pass;
use super::dedup::dedup_imports;
use super::folder::FolderClass;
use super::import::{ImportTarget, rewrite_targets};
use std::path::Path;

/// Which importing files a cross-reference case applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every file in a feature folder
    Folder(FolderClass),
    /// A file with this name, wherever it lives
    File(&'static str),
    /// A file with this name inside a feature folder
    FileIn(&'static str, FolderClass),
}

impl Scope {
    pub fn matches(&self, path: &Path) -> bool {
        let file_name = path.file_name().and_then(|name| name.to_str());
        match *self {
            Scope::Folder(class) => FolderClass::classify(path) == class,
            Scope::File(name) => file_name == Some(name),
            Scope::FileIn(name, class) => {
                file_name == Some(name) && FolderClass::classify(path) == class
            }
        }
    }
}

/// One row of the cross-reference table
#[derive(Debug, Clone, Copy)]
pub struct CrossReference {
    pub scope: Scope,
    /// Bare file name as written in the import
    pub target: &'static str,
    pub replacement: &'static str,
}

const fn case(scope: Scope, target: &'static str, replacement: &'static str) -> CrossReference {
    CrossReference {
        scope,
        target,
        replacement,
    }
}

/// Known moved siblings. Targets are unique so no two cases can rewrite the
/// same import.
pub const CROSS_REFERENCES: &[CrossReference] = &[
    // Auth screens reach the entry screens through the screens aggregator
    case(Scope::Folder(FolderClass::Auth), "main_screen.dart", "../screens.dart"),
    case(Scope::Folder(FolderClass::Auth), "admin_login_screen.dart", "../screens.dart"),
    case(
        Scope::File("admin_dashboard_screen.dart"),
        "analytics_screen.dart",
        "../analytics/analytics_screen.dart",
    ),
    case(
        Scope::File("admin_dashboard_screen.dart"),
        "feature_usage_screen.dart",
        "../analytics/feature_usage_screen.dart",
    ),
    case(
        Scope::File("admin_dashboard_screen.dart"),
        "system_logs_screen.dart",
        "../analytics/system_logs_screen.dart",
    ),
    case(
        Scope::File("profile_screen.dart"),
        "settings_screen.dart",
        "../settings/settings_screen.dart",
    ),
    case(
        Scope::FileIn("main_screen.dart", FolderClass::User),
        "rewards_screen.dart",
        "../rewards/rewards_screen.dart",
    ),
];

/// Rewrites bare sibling imports using a cross-reference table
#[derive(Debug, Clone, Copy)]
pub struct CrossReferenceResolver {
    table: &'static [CrossReference],
}

impl Default for CrossReferenceResolver {
    fn default() -> Self {
        Self {
            table: CROSS_REFERENCES,
        }
    }
}

impl CrossReferenceResolver {
    pub fn with_table(table: &'static [CrossReference]) -> Self {
        Self { table }
    }

    /// Where a bare sibling import from `path` should point, if it moved
    pub fn resolve(&self, path: &Path, file: &str) -> Option<&'static str> {
        self.table
            .iter()
            .find(|case| case.target == file && case.scope.matches(path))
            .map(|case| case.replacement)
    }
}

impl Pass for CrossReferenceResolver {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn rewrite(&self, path: &Path, text: &str) -> String {
        let rewritten = rewrite_targets(text, |import| match import.classify() {
            ImportTarget::Sibling { file } => self.resolve(path, file).map(str::to_string),
            _ => None,
        });

        dedup_imports(&rewritten)
    }
}
