//! Language registry: external metadata about the languages the project
//! ships, maintained outside this pipeline.
//!
//! The registry is the source of truth for which persisted language files
//! exist and which languages use logographic (dense, character-based)
//! scripts. The character-set pass iterates registry entries rather than
//! listing the output directory, so stale files from removed languages
//! never leak into the manifests.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Metadata for one shipped language.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageInfo {
    /// Persisted file name for this language (e.g., "en"). Matches the
    /// value of the language's identity key in the sheet.
    pub file_name: String,

    /// Human-readable name (e.g., "English"). Informational only.
    #[serde(default)]
    pub name: String,

    /// Whether this language uses a logographic script. Logographic
    /// languages are excluded from the non-logographic character union.
    #[serde(default)]
    pub logographic: bool,
}

/// The full set of registered languages, in registry order.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageRegistry {
    languages: Vec<LanguageInfo>,
}

impl LanguageRegistry {
    /// Load the registry from its JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read language registry {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse language registry {}", path.display()))
    }

    /// Build a registry directly from language entries.
    pub fn from_languages(languages: Vec<LanguageInfo>) -> Self {
        Self { languages }
    }

    pub fn languages(&self) -> &[LanguageInfo] {
        &self.languages
    }

    /// File names of every registered language, deduplicated in registry
    /// order.
    pub fn file_names(&self) -> Vec<&str> {
        dedup_names(self.languages.iter())
    }

    /// File names of languages not flagged logographic, deduplicated in
    /// registry order.
    pub fn non_logographic_file_names(&self) -> Vec<&str> {
        dedup_names(self.languages.iter().filter(|lang| !lang.logographic))
    }
}

fn dedup_names<'a>(languages: impl Iterator<Item = &'a LanguageInfo>) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for lang in languages {
        if !names.contains(&lang.file_name.as_str()) {
            names.push(&lang.file_name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::from_languages(vec![
            LanguageInfo {
                file_name: "en".to_string(),
                name: "English".to_string(),
                logographic: false,
            },
            LanguageInfo {
                file_name: "fr".to_string(),
                name: "French".to_string(),
                logographic: false,
            },
            LanguageInfo {
                file_name: "ja".to_string(),
                name: "Japanese".to_string(),
                logographic: true,
            },
        ])
    }

    #[test]
    fn test_file_names_in_registry_order() {
        assert_eq!(registry().file_names(), vec!["en", "fr", "ja"]);
    }

    #[test]
    fn test_non_logographic_excludes_flagged() {
        assert_eq!(registry().non_logographic_file_names(), vec!["en", "fr"]);
    }

    #[test]
    fn test_file_names_deduplicated() {
        let reg = LanguageRegistry::from_languages(vec![
            LanguageInfo {
                file_name: "en".to_string(),
                name: "English (US)".to_string(),
                logographic: false,
            },
            LanguageInfo {
                file_name: "en".to_string(),
                name: "English (UK)".to_string(),
                logographic: false,
            },
        ]);
        assert_eq!(reg.file_names(), vec!["en"]);
    }

    #[test]
    fn test_parses_registry_json() {
        let json = r#"{
            "languages": [
                {"file_name": "en", "name": "English"},
                {"file_name": "zh", "name": "Chinese", "logographic": true}
            ]
        }"#;
        let reg: LanguageRegistry = serde_json::from_str(json).expect("parse");
        assert_eq!(reg.languages().len(), 2);
        assert!(!reg.languages()[0].logographic);
        assert!(reg.languages()[1].logographic);
    }
}
