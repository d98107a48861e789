//! Character-set extraction over persisted language files.
//!
//! Downstream font tooling needs to know exactly which characters each
//! language can render, so this pass reduces every persisted `key=value`
//! file to its set of distinct value characters, then unions those sets
//! across all languages and across non-logographic languages only (dense
//! scripts get their own font treatment). Sets keep first-occurrence order,
//! which makes re-runs on unchanged input byte-identical.

use crate::registry::LanguageRegistry;
use anyhow::{Context, Result};
use indexmap::IndexSet;
use std::path::Path;
use tracing::info;

/// Suffix for per-language character files (`<name>Chars.txt`).
pub const CHARS_FILE_SUFFIX: &str = "Chars.txt";

/// Union of every registered language's characters.
pub const ALL_CHARS_FILE: &str = "AllChars.txt";

/// Union restricted to languages not flagged logographic.
pub const NON_ASIAN_CHARS_FILE: &str = "NonAsianChars.txt";

/// Distinct characters of the value portion of `key=value` lines, as a
/// single delimiter-free string in first-occurrence order. Lines without
/// an `=` are ignored; the value is everything after the first `=`.
pub fn unique_char_string(content: &str) -> String {
    let mut chars: IndexSet<char> = IndexSet::new();
    for line in content.lines() {
        if let Some((_, value)) = line.split_once('=') {
            chars.extend(value.chars());
        }
    }
    chars.into_iter().collect()
}

/// Regenerate every character file from the persisted language files named
/// by the registry.
pub fn update_character_sets(
    registry: &LanguageRegistry,
    languages_dir: &Path,
    chars_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(chars_dir).with_context(|| {
        format!("Failed to create chars directory {}", chars_dir.display())
    })?;

    // Per-language files
    for name in registry.file_names() {
        let chars = language_chars(languages_dir, name)?;
        let out_path = chars_dir.join(format!("{name}{CHARS_FILE_SUFFIX}"));
        std::fs::write(&out_path, chars)
            .with_context(|| format!("Failed to write chars file {}", out_path.display()))?;
    }
    info!("Language chars updated");

    // All-languages union
    let all = union_chars(languages_dir, &registry.file_names())?;
    std::fs::write(chars_dir.join(ALL_CHARS_FILE), all)
        .with_context(|| format!("Failed to write {ALL_CHARS_FILE}"))?;
    info!("{} updated", ALL_CHARS_FILE);

    // Non-logographic union
    let non_logographic = union_chars(languages_dir, &registry.non_logographic_file_names())?;
    std::fs::write(chars_dir.join(NON_ASIAN_CHARS_FILE), non_logographic)
        .with_context(|| format!("Failed to write {NON_ASIAN_CHARS_FILE}"))?;
    info!("{} updated", NON_ASIAN_CHARS_FILE);

    Ok(())
}

fn language_chars(languages_dir: &Path, name: &str) -> Result<String> {
    let path = languages_dir.join(name);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read language file {}", path.display()))?;
    Ok(unique_char_string(&content))
}

fn union_chars(languages_dir: &Path, names: &[&str]) -> Result<String> {
    let mut chars: IndexSet<char> = IndexSet::new();
    for name in names {
        chars.extend(language_chars(languages_dir, name)?.chars());
    }
    Ok(chars.into_iter().collect())
}
