use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Spreadsheet feed
    pub spreadsheet_id: String,
    pub subsheet_count: u32,
    pub sheets_base_url: String,

    // Row/key conventions
    pub key_column: String,
    pub id_name_key: String,

    // Output locations
    pub languages_dir: PathBuf,
    pub chars_dir: PathBuf,

    // Language registry (file names + script flags)
    pub registry_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Spreadsheet feed
            spreadsheet_id: std::env::var("SHEETSYNC_SPREADSHEET_ID")
                .context("SHEETSYNC_SPREADSHEET_ID not set")?,
            subsheet_count: std::env::var("SHEETSYNC_SUBSHEET_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            sheets_base_url: std::env::var("SHEETSYNC_SHEETS_BASE_URL")
                .unwrap_or_else(|_| "https://docs.google.com".to_string()),

            // Row/key conventions
            key_column: std::env::var("SHEETSYNC_KEY_COLUMN")
                .unwrap_or_else(|_| "key".to_string()),
            id_name_key: std::env::var("SHEETSYNC_ID_NAME_KEY")
                .unwrap_or_else(|_| "meta.idname".to_string()),

            // Output locations
            languages_dir: std::env::var("SHEETSYNC_LANGUAGES_DIR")
                .unwrap_or_else(|_| "languages".to_string())
                .into(),
            chars_dir: std::env::var("SHEETSYNC_CHARS_DIR")
                .unwrap_or_else(|_| "chars".to_string())
                .into(),

            // Language registry
            registry_file: std::env::var("SHEETSYNC_REGISTRY_FILE")
                .unwrap_or_else(|_| "languages.json".to_string())
                .into(),
        })
    }
}
