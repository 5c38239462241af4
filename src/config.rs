//! Configuration module for the import normalizer.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `IN_` and use double underscores
//! to separate nested levels:
//! - `IN_PATHS__SCREENS_ROOT=app/screens` sets `paths.screens_root`
//! - `IN_OUTPUT__DRY_RUN=true` sets `output.dry_run`
//! - `IN_DEBUG=true` sets `debug`

use crate::rewrite::Layout;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".importnorm";
const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .importnorm is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Where the source subtrees live
    #[serde(default)]
    pub paths: PathsConfig,

    /// Depth correction settings
    #[serde(default)]
    pub depth: DepthConfig,

    /// Output behavior
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PathsConfig {
    /// Root of the screens subtree
    #[serde(default = "default_screens_root")]
    pub screens_root: PathBuf,

    /// Root of the widgets subtree
    #[serde(default = "default_widgets_root")]
    pub widgets_root: PathBuf,

    /// Extension of the source files to rewrite
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DepthConfig {
    /// Files that sit one folder deeper than their folder name suggests
    #[serde(default = "default_nested_files")]
    pub nested_files: Vec<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// Compute rewrites without writing files
    #[serde(default = "default_false")]
    pub dry_run: bool,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_screens_root() -> PathBuf {
    PathBuf::from("lib/screens")
}
fn default_widgets_root() -> PathBuf {
    PathBuf::from("lib/widgets")
}
fn default_extension() -> String {
    "dart".to_string()
}
fn default_nested_files() -> Vec<PathBuf> {
    [
        "analytics/analytics_screen.dart",
        "analytics/feature_usage_screen.dart",
        "analytics/system_logs_screen.dart",
        "auth/auth_screen.dart",
        "auth/splash_screen.dart",
        "rewards/my_cards_screen.dart",
        "rewards/redeem_rewards_screen.dart",
        "rewards/rewards_screen.dart",
        "settings/about_screen.dart",
        "settings/language_screen.dart",
        "settings/notification_settings_screen.dart",
        "settings/security_settings_screen.dart",
        "settings/settings_screen.dart",
        "user/add_waste_screen.dart",
        "user/main_screen.dart",
        "user/partner_stores_screen.dart",
        "user/profile_screen.dart",
        "user/qr_scanner_screen.dart",
        "user/waste_calendar_screen.dart",
    ]
    .iter()
    .map(|file| default_screens_root().join(file))
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            paths: PathsConfig::default(),
            depth: DepthConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            screens_root: default_screens_root(),
            widgets_root: default_widgets_root(),
            extension: default_extension(),
        }
    }
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            nested_files: default_nested_files(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        // Try to find the workspace root by looking for .importnorm directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file.
    ///
    /// A file inside a `.importnorm` directory makes that directory's parent
    /// the workspace root.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        let path = path.as_ref();
        Self::figment(path.to_path_buf())
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = path
                        .parent()
                        .filter(|dir| dir.file_name().is_some_and(|name| name == CONFIG_DIR))
                        .and_then(Path::parent)
                        .map(Path::to_path_buf);
                }
                settings
            })
    }

    fn figment(config_path: PathBuf) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore (__) separates nested levels
            .merge(Env::prefixed("IN_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the workspace config by looking for a .importnorm directory
    /// from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .importnorm is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(|ancestor| ancestor.to_path_buf())
    }

    /// Folder layout with the configured nested-file exceptions
    pub fn layout(&self) -> Layout {
        Layout::new(self.depth.nested_files.iter().cloned())
    }

    /// Anchor relative source paths at the workspace root so a run from a
    /// subdirectory sees the same tree as a run from the root.
    pub fn resolve_paths(&mut self) {
        let Some(root) = self.workspace_root.clone() else {
            return;
        };

        let anchor = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        };
        anchor(&mut self.paths.screens_root);
        anchor(&mut self.paths.widgets_root);
        self.depth.nested_files.iter_mut().for_each(anchor);
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let nested = default_nested_files()
            .iter()
            .map(|path| format!("    \"{}\",", path.display()))
            .collect::<Vec<_>>()
            .join("\n");

        let template = format!(
            r#"# importnorm configuration file

# Version of the configuration schema
version = 1

# Global debug mode (debug-level logging)
debug = false

[paths]
# Subtree rewritten by `normalize` and `resolve`
screens_root = "lib/screens"

# Subtree rewritten by `widgets`
widgets_root = "lib/widgets"

# Only files with this extension are rewritten
extension = "dart"

[depth]
# Files that sit one folder deeper than their folder name suggests.
# `correct-depth` moves their one-hop aggregator imports to two hops,
# and `normalize` gives them two hops directly.
# Missing entries are skipped.
nested_files = [
{nested}
]

[output]
# Report what would change without writing files
dry_run = false
"#
        );

        std::fs::write(&config_path, template)?;
        Ok(config_path)
    }
}
