//! Folder classification and the shared-module table
//!
//! A file's [`FolderClass`] is looked up from the folder names on its path
//! and decides how many `../` hops it needs to reach the shared top-level
//! modules. [`Layout`] adds the explicit nested-file exceptions on top of
//! that lookup so every pass agrees on a file's depth.

use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Logical folder a source file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderClass {
    /// Directly inside the screens folder
    TopLevel,
    Admin,
    Analytics,
    Auth,
    Rewards,
    Settings,
    User,
    Widgets,
    /// Anywhere else
    Other,
}

/// Feature folder names, in lookup order
const FEATURE_FOLDERS: &[(&str, FolderClass)] = &[
    ("admin", FolderClass::Admin),
    ("analytics", FolderClass::Analytics),
    ("auth", FolderClass::Auth),
    ("rewards", FolderClass::Rewards),
    ("settings", FolderClass::Settings),
    ("user", FolderClass::User),
    ("widgets", FolderClass::Widgets),
];

const SCREENS_FOLDER: &str = "screens";
const WIDGETS_FOLDER: &str = "widgets";

/// Directory names that decide a file's folder.
///
/// Below a `screens` or `widgets` folder that is every directory from the
/// innermost such folder down. Elsewhere only the immediate parent counts,
/// so folders above the source tree (`/home/user/...`) never leak in.
fn scoped_folders(path: &Path) -> Vec<&str> {
    let Some(parent) = path.parent() else {
        return Vec::new();
    };
    let names: Vec<&str> = parent
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect();

    let anchor = names
        .iter()
        .rposition(|name| *name == SCREENS_FOLDER || *name == WIDGETS_FOLDER);

    match anchor {
        Some(index) => names[index..].to_vec(),
        None => names.last().copied().into_iter().collect(),
    }
}

impl FolderClass {
    /// Classify a file by the folders on its path.
    ///
    /// Only directory components are considered, so a file called
    /// `user.dart` is not mistaken for the `user/` folder. When several
    /// feature folders appear, the innermost one wins.
    pub fn classify(path: &Path) -> Self {
        let folders = scoped_folders(path);

        let feature = folders.iter().rev().find_map(|name| {
            FEATURE_FOLDERS
                .iter()
                .find(|(folder, _)| folder == name)
                .map(|(_, class)| *class)
        });

        if let Some(class) = feature {
            return class;
        }

        match folders.last() {
            Some(&SCREENS_FOLDER) => FolderClass::TopLevel,
            _ => FolderClass::Other,
        }
    }

    /// Hop depth to reach the shared modules from this folder
    pub fn depth(self) -> Depth {
        match self {
            FolderClass::TopLevel | FolderClass::Other => Depth::One,
            _ => Depth::Two,
        }
    }

    /// Folder name as it appears on disk, if this class has one
    pub fn folder_name(self) -> Option<&'static str> {
        FEATURE_FOLDERS
            .iter()
            .find(|(_, class)| *class == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for FolderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderClass::TopLevel => write!(f, "top-level"),
            FolderClass::Other => write!(f, "other"),
            class => write!(f, "{}", class.folder_name().unwrap_or("other")),
        }
    }
}

/// Number of parent-directory hops a file needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Depth {
    One,
    Two,
}

impl Depth {
    pub fn hops(self) -> usize {
        match self {
            Depth::One => 1,
            Depth::Two => 2,
        }
    }

    /// Relative prefix for this depth (`../` or `../../`)
    pub fn prefix(self) -> &'static str {
        match self {
            Depth::One => "../",
            Depth::Two => "../../",
        }
    }
}

/// Shared top-level modules that every screen and widget may import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedModule {
    Constants,
    Models,
    Providers,
    Services,
    Widgets,
}

impl SharedModule {
    pub const ALL: [SharedModule; 5] = [
        SharedModule::Constants,
        SharedModule::Models,
        SharedModule::Providers,
        SharedModule::Services,
        SharedModule::Widgets,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SharedModule::Constants => "constants",
            SharedModule::Models => "models",
            SharedModule::Providers => "providers",
            SharedModule::Services => "services",
            SharedModule::Widgets => "widgets",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|module| module.name() == name)
    }

    /// File that re-exports the whole folder
    pub fn aggregator(self) -> &'static str {
        match self {
            SharedModule::Constants => "app_constants.dart",
            SharedModule::Models => "models.dart",
            SharedModule::Providers => "providers.dart",
            SharedModule::Services => "services.dart",
            SharedModule::Widgets => "widgets.dart",
        }
    }

    /// Whether individual-file imports collapse into the aggregator.
    ///
    /// Constants keep their file name and only get their hops fixed.
    pub fn collapses(self) -> bool {
        !matches!(self, SharedModule::Constants)
    }

    /// Whether the file lives somewhere below this module's folder
    pub fn contains(self, path: &Path) -> bool {
        scoped_folders(path).contains(&self.name())
    }

    /// Canonical aggregator import target at the given depth
    pub fn aggregator_target(self, depth: Depth) -> String {
        format!("{}{}/{}", depth.prefix(), self.name(), self.aggregator())
    }
}

/// Folder classification plus the explicit nested-file exceptions
#[derive(Debug, Clone, Default)]
pub struct Layout {
    nested: Vec<PathBuf>,
}

impl Layout {
    /// Build a layout from the nested-file list.
    ///
    /// `./` components are dropped so entries compare by their trailing
    /// path components only.
    pub fn new(nested: impl IntoIterator<Item = PathBuf>) -> Self {
        let nested = nested
            .into_iter()
            .map(|path| {
                path.components()
                    .filter(|component| !matches!(component, Component::CurDir))
                    .collect::<PathBuf>()
            })
            .filter(|path| !path.as_os_str().is_empty())
            .collect();
        Self { nested }
    }

    /// Whether the file is one of the listed nested files
    pub fn is_nested(&self, path: &Path) -> bool {
        self.nested.iter().any(|entry| path.ends_with(entry))
    }

    /// Depth a file needs, with listed nested files forced to two hops
    pub fn depth_for(&self, path: &Path) -> Depth {
        if self.is_nested(path) {
            Depth::Two
        } else {
            FolderClass::classify(path).depth()
        }
    }

    pub fn nested_files(&self) -> &[PathBuf] {
        &self.nested
    }
}

/// Whether the file is its folder's aggregator (`widgets/widgets.dart`)
pub fn is_aggregator_file(path: &Path) -> bool {
    let stem = path.file_stem().and_then(|stem| stem.to_str());
    let folder = path
        .parent()
        .and_then(|parent| parent.file_name())
        .and_then(|name| name.to_str());

    matches!((stem, folder), (Some(stem), Some(folder)) if stem == folder)
}
