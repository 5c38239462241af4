//! Duplicate import removal

use super::import::ImportLine;
use std::collections::HashSet;

/// Drop import lines whose literal text repeats an earlier import line.
///
/// First occurrences keep their position. Non-import lines are never
/// touched, even when they repeat.
pub fn dedup_imports(text: &str) -> String {
    let mut seen = HashSet::new();

    text.split('\n')
        .filter(|line| !ImportLine::is_import(line) || seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
