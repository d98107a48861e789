//! Entry normalization: the text transform applied to every cell value
//! before it is stored in a language table.
//!
//! Spreadsheet cells arrive with stray line breaks and padding that must not
//! reach the persisted files, and interior line breaks have to survive the
//! one-entry-per-line file format. Normalization is pure, deterministic, and
//! idempotent.

use regex::Regex;
use std::sync::OnceLock;

// Regex patterns for stripping (cached for performance)
static LEADING_BREAKS_REGEX: OnceLock<Regex> = OnceLock::new();
static TRAILING_BREAKS_REGEX: OnceLock<Regex> = OnceLock::new();
static LEADING_SPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static TRAILING_SPACE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Normalize a raw cell value for storage.
///
/// In order: strip leading line breaks, strip trailing line breaks, strip
/// leading spaces, strip trailing spaces, then replace every remaining
/// literal line break with the two-character escape `\n` so the value
/// serializes to a single line.
pub fn normalize_entry(value: &str) -> String {
    let leading_breaks = LEADING_BREAKS_REGEX.get_or_init(|| Regex::new(r"^\n*").unwrap());
    let trailing_breaks = TRAILING_BREAKS_REGEX.get_or_init(|| Regex::new(r"\n*$").unwrap());
    let leading_space = LEADING_SPACE_REGEX.get_or_init(|| Regex::new(r"^ *").unwrap());
    let trailing_space = TRAILING_SPACE_REGEX.get_or_init(|| Regex::new(r" *$").unwrap());

    let value = leading_breaks.replace(value, "");
    let value = trailing_breaks.replace(&value, "");
    let value = leading_space.replace(&value, "");
    let value = trailing_space.replace(&value, "");
    value.replace('\n', "\\n")
}
