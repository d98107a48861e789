//! Persists language tables to flat `key=value` files.
//!
//! Each table is written to `<languages_dir>/<identity name>`, overwriting
//! whatever was there; re-running the sync is the recovery mechanism for a
//! partial run. Writing also surfaces two advisory conditions: a table whose
//! identity key was never populated (the file cannot be named, so it is
//! skipped), and a language whose `meta.recorded` flag is not affirmatively
//! "Y" in the sheet.

use crate::table::LanguageTable;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Write every table to the languages directory. Fails on filesystem
/// errors; everything else is advisory.
pub fn write_language_files<'a>(
    tables: impl Iterator<Item = &'a LanguageTable>,
    languages_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(languages_dir).with_context(|| {
        format!(
            "Failed to create languages directory {}",
            languages_dir.display()
        )
    })?;

    for table in tables {
        write_language_file(table, languages_dir)?;
    }

    info!("Language content updated");
    Ok(())
}

fn write_language_file(table: &LanguageTable, languages_dir: &Path) -> Result<()> {
    let Some(name) = table.identity_name() else {
        warn!(
            "Language column {} has no identity name entry; skipping file write",
            table.column()
        );
        return Ok(());
    };

    let path = languages_dir.join(name);
    std::fs::write(&path, table.to_flat_string())
        .with_context(|| format!("Failed to write language file {}", path.display()))?;

    if !table.is_metadata_recorded() {
        warn!(
            "Language {} does not have metadata recorded in the source sheet",
            table.column()
        );
    }

    Ok(())
}
