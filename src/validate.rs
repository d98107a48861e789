//! Parameter consistency checking between a language entry and the
//! reference language's entry for the same key.
//!
//! Localized strings carry positional placeholders (`{0}`, `{1}`, ...) that
//! the game substitutes at runtime. A translation that drops or adds one is
//! almost certainly broken, but translators also legitimately reorder and
//! occasionally omit them, so mismatches are advisory: they are logged and
//! reported, and the entry is stored regardless.

use crate::table::LanguageTable;
use tracing::warn;

/// Outcome of checking one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Non-critical warnings about placeholder mismatches
    pub warnings: Vec<String>,
}

impl ConsistencyReport {
    fn clean() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether the entry should be stored. Always `true`: the check is
    /// advisory and never gates the write. Kept as an explicit method so
    /// the store site reads like the gate it deliberately is not.
    pub fn accepted(&self) -> bool {
        true
    }
}

/// Count positional placeholders appearing contiguously from `{0}`.
///
/// Returns the largest N such that `{0}` through `{N-1}` are all present,
/// stopping at the first missing index. `{2}` without `{1}` does not count.
pub fn placeholder_count(value: &str) -> usize {
    let mut count = 0;
    while value.contains(&format!("{{{count}}}")) {
        count += 1;
    }
    count
}

/// Check a normalized candidate value against the reference language's
/// value for the same key.
///
/// Skips entirely (clean report) when the checked table is the reference
/// itself, when no reference exists yet, or when the reference has no value
/// for the key. A placeholder-count mismatch produces a warning naming the
/// language and key.
pub fn check_entry(
    table: &LanguageTable,
    key: &str,
    value: &str,
    reference: Option<&LanguageTable>,
) -> ConsistencyReport {
    let Some(reference) = reference else {
        return ConsistencyReport::clean();
    };
    if reference.column() == table.column() {
        return ConsistencyReport::clean();
    }
    let Some(reference_value) = reference.get(key) else {
        return ConsistencyReport::clean();
    };

    let mut report = ConsistencyReport::clean();
    let candidate_count = placeholder_count(value);
    let reference_count = placeholder_count(reference_value);
    if candidate_count != reference_count {
        let language = table.identity_name().unwrap_or(table.column());
        warn!(
            "Language {} has an inconsistent parameter count in key {} ({} vs {} in reference)",
            language, key, candidate_count, reference_count
        );
        report.warnings.push(format!(
            "Parameter count mismatch in language {} key {}: {} vs {}",
            language, key, candidate_count, reference_count
        ));
    }

    report
}
