//! In-memory key/value table for a single language.
//!
//! One `LanguageTable` holds the full localized content of one language,
//! keyed by free-form localization keys in spreadsheet order. Two reserved
//! keys carry metadata inline with the content and get typed accessors here
//! instead of being fished out of the generic mapping at call sites: the
//! identity key (canonical short name, used to name the output file) and
//! `meta.recorded` (whether the language's metadata has been filled in on
//! the source sheet).

use indexmap::IndexMap;

/// Reserved key whose value says whether the language's metadata has been
/// recorded in the source sheet. Expected value is "Y" (case-insensitive).
pub const METADATA_RECORDED_KEY: &str = "meta.recorded";

/// Localized content for one language, in insertion order.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    /// Spreadsheet column this table was populated from (e.g., "english").
    column: String,

    /// Reserved key whose value is the canonical short name for this
    /// language (e.g., "en"), configurable because the feed mangles the
    /// header row casing.
    identity_key: String,

    entries: IndexMap<String, String>,
}

impl LanguageTable {
    /// Create an empty table for the given spreadsheet column.
    pub fn new(column: impl Into<String>, identity_key: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            identity_key: identity_key.into(),
            entries: IndexMap::new(),
        }
    }

    /// The spreadsheet column name this table belongs to.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Insert or overwrite an entry. Keys stay unique; re-inserting a key
    /// keeps its original position in the table.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical short name for this language, taken from the reserved
    /// identity key. `None` until the sheet has populated that key.
    pub fn identity_name(&self) -> Option<&str> {
        self.entries.get(&self.identity_key).map(String::as_str)
    }

    /// Raw value of the reserved `meta.recorded` key, if present.
    pub fn metadata_recorded(&self) -> Option<&str> {
        self.get(METADATA_RECORDED_KEY)
    }

    /// Whether metadata has been affirmatively recorded ("Y", any case).
    pub fn is_metadata_recorded(&self) -> bool {
        self.metadata_recorded()
            .map(|v| v.eq_ignore_ascii_case("Y"))
            .unwrap_or(false)
    }

    /// Serialize to the flat persisted format: one `key=value` line per
    /// entry, in insertion order. Values are already single-line (the
    /// normalizer escapes raw line breaks before insertion).
    pub fn to_flat_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}
