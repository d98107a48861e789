//! The two pipeline entry points.
//!
//! `synchronize_languages` drives the full sheet-to-files sync;
//! `update_character_sets` regenerates the character manifests from the
//! files the sync produced. They are independent runs: the second assumes
//! the first has already happened at some point.

use crate::builder::LanguageTableBuilder;
use crate::chars;
use crate::config::Config;
use crate::registry::LanguageRegistry;
use crate::sheets::SheetClient;
use crate::writer;
use anyhow::{Context, Result};
use tracing::info;

/// Fetch every configured row-group, build the per-language tables, and
/// persist them to the languages directory.
pub async fn synchronize_languages(config: &Config) -> Result<()> {
    let client = SheetClient::new(config);
    let mut builder = LanguageTableBuilder::new(&config.key_column, &config.id_name_key);

    // Row-group 1 establishes the language set and reference table, so
    // groups are ingested strictly in order.
    for index in 1..=config.subsheet_count {
        info!("Fetching subsheet {} of {}", index, config.subsheet_count);
        let rows = client
            .fetch_row_group(index)
            .await
            .context("Failed to read spreadsheet feed")?;
        builder.ingest_row_group(&rows);
    }

    let tables = builder.finish();
    if tables.is_empty() {
        info!("No language columns discovered; nothing to write");
        return Ok(());
    }

    writer::write_language_files(tables.values(), &config.languages_dir)
}

/// Recompute per-language, all-languages, and non-logographic character
/// files from the persisted language files.
pub fn update_character_sets(config: &Config) -> Result<()> {
    let registry = LanguageRegistry::load(&config.registry_file)?;
    chars::update_character_sets(&registry, &config.languages_dir, &config.chars_dir)
}
