//! Facet extraction for populating filter menus.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap, HashSet};
use vigil_common::{Platform, ProgramRecord};

/// Canonical spellings for language names that platforms report
/// inconsistently.
static LANGUAGE_SPELLINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("javascript", "JavaScript"),
        ("typescript", "TypeScript"),
        ("cpp", "C/C++"),
        ("golang", "Go"),
    ])
});

/// Distinct languages across a record list, sorted, blanks dropped.
pub fn unique_languages<R: ProgramRecord>(records: &[R]) -> Vec<String> {
    let set: BTreeSet<String> = records
        .iter()
        .flat_map(|record| record.languages().iter())
        .filter(|lang| !lang.trim().is_empty())
        .cloned()
        .collect();
    set.into_iter().collect()
}

/// Distinct platforms across a record list, sorted by display name.
pub fn unique_platforms<R: ProgramRecord>(records: &[R]) -> Vec<Platform> {
    let mut seen = HashSet::new();
    let mut platforms: Vec<Platform> = records
        .iter()
        .map(|record| record.platform())
        .filter(|platform| seen.insert(*platform))
        .collect();
    platforms.sort_by_key(|p| p.as_str());
    platforms
}

/// Normalizes a language name to its canonical spelling.
pub fn format_language_name(language: &str) -> String {
    let trimmed = language.trim();
    LANGUAGE_SPELLINGS
        .get(trimmed.to_lowercase().as_str())
        .map_or_else(|| trimmed.to_string(), |canonical| (*canonical).to_string())
}
