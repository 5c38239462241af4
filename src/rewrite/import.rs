//! Import declaration records
//!
//! Import lines are recognized by pattern over the raw text rather than by
//! a grammar. Each recognized line is parsed once into an [`ImportLine`],
//! its target is rewritten as data, and the line is rendered back with the
//! original indentation, quote style and suffix (`;`, ` as x;`, ` show A;`).

use super::folder::SharedModule;
use regex::Regex;
use std::sync::LazyLock;

static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\s*)import\s+(['"])([^'"]+)(['"])(.*)$"#).expect("Invalid regex")
});

const PARENT_HOP: &str = "../";
const SOURCE_EXTENSION: &str = ".dart";

/// One import declaration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLine {
    indent: String,
    keyword_gap: String,
    quote: char,
    /// The path being imported (e.g. `../models/user.dart`)
    pub target: String,
    suffix: String,
}

/// What an import target points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget<'a> {
    /// A file inside one of the shared top-level modules
    Shared {
        module: SharedModule,
        hops: usize,
        /// Path below the module folder (`user.dart`, `auth/token.dart`)
        file: &'a str,
    },
    /// A bare file name resolved against the importing file's folder
    Sibling { file: &'a str },
    /// Package, SDK or any other relative import
    Other,
}

impl ImportLine {
    /// Parse a single line. Returns `None` for anything that is not an
    /// import declaration.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = IMPORT_PATTERN.captures(line)?;
        let open = captures.get(2)?.as_str();
        let close = captures.get(4)?.as_str();
        if open != close {
            return None;
        }

        let whole = captures.get(0)?.as_str();
        let indent = captures.get(1)?.as_str();
        let quote_start = captures.get(2)?.start();
        // Text between `import` and the opening quote
        let keyword_gap = &whole[indent.len() + "import".len()..quote_start];

        Some(Self {
            indent: indent.to_string(),
            keyword_gap: keyword_gap.to_string(),
            quote: open.chars().next()?,
            target: captures.get(3)?.as_str().to_string(),
            suffix: captures.get(5)?.as_str().to_string(),
        })
    }

    /// Whether a raw line is an import declaration
    pub fn is_import(line: &str) -> bool {
        Self::parse(line).is_some()
    }

    /// Whether the declaration ends right after its target, with no
    /// `show`, `hide` or `as` clause
    pub fn is_plain(&self) -> bool {
        self.suffix.trim_start().starts_with(';')
    }

    /// Copy of this import pointing at a different target
    pub fn with_target(&self, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..self.clone()
        }
    }

    /// Render back to a source line
    pub fn render(&self) -> String {
        format!(
            "{}import{}{}{}{}{}",
            self.indent, self.keyword_gap, self.quote, self.target, self.quote, self.suffix
        )
    }

    /// Classify the target path
    pub fn classify(&self) -> ImportTarget<'_> {
        classify_target(&self.target)
    }
}

/// Classify an import target path.
///
/// A shared-module import has at least one leading `../`, then a shared
/// module folder, then a non-empty path ending in the source extension.
pub fn classify_target(target: &str) -> ImportTarget<'_> {
    if target.contains(':') || !target.ends_with(SOURCE_EXTENSION) {
        return ImportTarget::Other;
    }

    let mut rest = target;
    let mut hops = 0;
    while let Some(stripped) = rest.strip_prefix(PARENT_HOP) {
        rest = stripped;
        hops += 1;
    }

    if hops == 0 {
        if rest.contains('/') {
            return ImportTarget::Other;
        }
        return ImportTarget::Sibling { file: rest };
    }

    let Some((folder, file)) = rest.split_once('/') else {
        return ImportTarget::Other;
    };

    match SharedModule::from_name(folder) {
        Some(module) if file.len() > SOURCE_EXTENSION.len() => {
            ImportTarget::Shared { module, hops, file }
        }
        _ => ImportTarget::Other,
    }
}

/// Rewrite the targets of every import line in `text`.
///
/// `rewrite` receives each parsed import and returns the new target, or
/// `None` to leave the line alone. Lines that are not imports, and imports
/// whose target does not change, are kept byte for byte.
pub fn rewrite_targets<F>(text: &str, mut rewrite: F) -> String
where
    F: FnMut(&ImportLine) -> Option<String>,
{
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            let Some(import) = ImportLine::parse(line) else {
                return line.to_string();
            };
            match rewrite(&import) {
                Some(target) if target != import.target => import.with_target(target).render(),
                _ => line.to_string(),
            }
        })
        .collect();

    lines.join("\n")
}
