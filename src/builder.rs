//! Builds one `LanguageTable` per language column from the spreadsheet
//! feed's row-groups.
//!
//! The first row of the first row-group is the discovery row: its non-key
//! columns define the set of target languages, in column order, and the
//! first of those becomes the reference language for parameter consistency
//! checks. That same row is then processed like any other, which is how the
//! identity-key entries get populated. Later row-groups reuse the language
//! set; columns that match no known language are ignored.

use crate::normalize::normalize_entry;
use crate::sheets::Row;
use crate::table::LanguageTable;
use crate::validate;
use indexmap::IndexMap;
use tracing::{debug, info};

pub struct LanguageTableBuilder {
    key_column: String,
    id_name_key: String,

    /// Column name -> table, in discovery order.
    tables: IndexMap<String, LanguageTable>,

    /// Column of the reference language (first discovered).
    reference_column: Option<String>,

    saw_first_group: bool,
}

impl LanguageTableBuilder {
    pub fn new(key_column: impl Into<String>, id_name_key: impl Into<String>) -> Self {
        Self {
            key_column: key_column.into(),
            id_name_key: id_name_key.into(),
            tables: IndexMap::new(),
            reference_column: None,
            saw_first_group: false,
        }
    }

    /// Ingest one row-group, in feed order. The first call discovers the
    /// language set; an empty first group leaves it empty, and every later
    /// group then has no matching columns to write to.
    pub fn ingest_row_group(&mut self, rows: &[Row]) {
        if !self.saw_first_group {
            self.saw_first_group = true;
            if let Some(first_row) = rows.first() {
                self.discover_languages(first_row);
            }
        }

        for row in rows {
            self.ingest_row(row);
        }
    }

    /// The populated tables, keyed by language column in discovery order.
    pub fn finish(self) -> IndexMap<String, LanguageTable> {
        self.tables
    }

    fn discover_languages(&mut self, first_row: &Row) {
        for cell in &first_row.cells {
            if cell.column == self.key_column {
                continue;
            }
            if self.reference_column.is_none() {
                self.reference_column = Some(cell.column.clone());
            }
            self.tables.insert(
                cell.column.clone(),
                LanguageTable::new(cell.column.clone(), self.id_name_key.clone()),
            );
        }
        info!(
            "Discovered {} language columns (reference: {})",
            self.tables.len(),
            self.reference_column.as_deref().unwrap_or("none")
        );
    }

    fn ingest_row(&mut self, row: &Row) {
        let row_key = row
            .cells
            .iter()
            .find(|cell| cell.column == self.key_column)
            .map(|cell| cell.value.as_str())
            .unwrap_or("");

        if row_key.is_empty() {
            debug!("Skipping row with empty key designator");
            return;
        }

        for cell in &row.cells {
            if cell.column == self.key_column || cell.value.is_empty() {
                continue;
            }
            if !self.tables.contains_key(&cell.column) {
                continue;
            }

            let normalized = normalize_entry(&cell.value);

            // Advisory check against the reference language; a mismatch
            // warns but never blocks the write.
            let report = {
                let table = &self.tables[&cell.column];
                let reference = self
                    .reference_column
                    .as_ref()
                    .and_then(|column| self.tables.get(column));
                validate::check_entry(table, row_key, &normalized, reference)
            };

            if report.accepted() {
                if let Some(table) = self.tables.get_mut(&cell.column) {
                    table.insert(row_key, normalized);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::Cell;

    fn row(cells: Vec<(&str, &str)>) -> Row {
        Row::new(
            cells
                .into_iter()
                .map(|(column, value)| Cell::new(column, value))
                .collect(),
        )
    }

    fn builder() -> LanguageTableBuilder {
        LanguageTableBuilder::new("key", "meta.idname")
    }

    // ==================== Discovery Tests ====================

    #[test]
    fn test_discovers_languages_from_first_row() {
        let mut b = builder();
        b.ingest_row_group(&[row(vec![
            ("key", "meta.idname"),
            ("english", "en"),
            ("french", "fr"),
        ])]);

        let tables = b.finish();
        let columns: Vec<_> = tables.keys().map(String::as_str).collect();
        assert_eq!(columns, vec!["english", "french"]);
    }

    #[test]
    fn test_first_language_is_reference() {
        let mut b = builder();
        b.ingest_row_group(&[row(vec![
            ("key", "meta.idname"),
            ("english", "en"),
            ("french", "fr"),
        ])]);
        assert_eq!(b.reference_column.as_deref(), Some("english"));
    }

    #[test]
    fn test_empty_first_group_yields_no_languages() {
        let mut b = builder();
        b.ingest_row_group(&[]);
        b.ingest_row_group(&[row(vec![("key", "greeting"), ("english", "Hello")])]);

        assert!(b.finish().is_empty());
    }

    #[test]
    fn test_discovery_row_is_also_processed() {
        let mut b = builder();
        b.ingest_row_group(&[row(vec![
            ("key", "meta.idname"),
            ("english", "en"),
            ("french", "fr"),
        ])]);

        let tables = b.finish();
        assert_eq!(tables["english"].identity_name(), Some("en"));
        assert_eq!(tables["french"].identity_name(), Some("fr"));
    }

    // ==================== Population Tests ====================

    #[test]
    fn test_populates_each_language_column() {
        let mut b = builder();
        b.ingest_row_group(&[
            row(vec![
                ("key", "meta.idname"),
                ("english", "en"),
                ("french", "fr"),
            ]),
            row(vec![
                ("key", "greeting"),
                ("english", "Hello"),
                ("french", "Bonjour"),
            ]),
        ]);

        let tables = b.finish();
        assert_eq!(tables["english"].get("greeting"), Some("Hello"));
        assert_eq!(tables["french"].get("greeting"), Some("Bonjour"));
    }

    #[test]
    fn test_values_are_normalized_on_insert() {
        let mut b = builder();
        b.ingest_row_group(&[
            row(vec![("key", "meta.idname"), ("english", "en")]),
            row(vec![("key", "speech"), ("english", "  Hello\nthere\n")]),
        ]);

        let tables = b.finish();
        assert_eq!(tables["english"].get("speech"), Some("Hello\\nthere"));
    }

    #[test]
    fn test_later_groups_extend_tables() {
        let mut b = builder();
        b.ingest_row_group(&[
            row(vec![("key", "meta.idname"), ("english", "en")]),
            row(vec![("key", "greeting"), ("english", "Hello")]),
        ]);
        b.ingest_row_group(&[row(vec![("key", "farewell"), ("english", "Bye")])]);

        let tables = b.finish();
        assert_eq!(tables["english"].get("greeting"), Some("Hello"));
        assert_eq!(tables["english"].get("farewell"), Some("Bye"));
    }

    #[test]
    fn test_unknown_columns_ignored() {
        let mut b = builder();
        b.ingest_row_group(&[row(vec![("key", "meta.idname"), ("english", "en")])]);
        b.ingest_row_group(&[row(vec![
            ("key", "greeting"),
            ("english", "Hello"),
            ("notes", "internal comment"),
        ])]);

        let tables = b.finish();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables["english"].get("greeting"), Some("Hello"));
    }

    // ==================== Skip Tests ====================

    #[test]
    fn test_empty_key_designator_leaves_no_entries() {
        let mut b = builder();
        b.ingest_row_group(&[
            row(vec![("key", "meta.idname"), ("english", "en")]),
            row(vec![("key", ""), ("english", "orphan value")]),
        ]);

        let tables = b.finish();
        assert_eq!(tables["english"].len(), 1);
    }

    #[test]
    fn test_missing_key_cell_leaves_no_entries() {
        let mut b = builder();
        b.ingest_row_group(&[
            row(vec![("key", "meta.idname"), ("english", "en")]),
            row(vec![("english", "orphan value")]),
        ]);

        let tables = b.finish();
        assert_eq!(tables["english"].len(), 1);
    }

    #[test]
    fn test_empty_cell_never_overwrites_existing_entry() {
        let mut b = builder();
        b.ingest_row_group(&[
            row(vec![("key", "meta.idname"), ("english", "en")]),
            row(vec![("key", "greeting"), ("english", "Hello")]),
            row(vec![("key", "greeting"), ("english", "")]),
        ]);

        let tables = b.finish();
        assert_eq!(tables["english"].get("greeting"), Some("Hello"));
    }

    // ==================== Advisory Check Tests ====================

    #[test]
    fn test_mismatched_placeholder_entry_is_still_stored() {
        let mut b = builder();
        b.ingest_row_group(&[
            row(vec![
                ("key", "meta.idname"),
                ("english", "en"),
                ("french", "fr"),
            ]),
            row(vec![
                ("key", "score"),
                ("english", "Score: {0} of {1}"),
                ("french", "Score: {0}"),
            ]),
        ]);

        // The French value drops {1}; the checker warns but the entry is
        // stored regardless.
        let tables = b.finish();
        assert_eq!(tables["french"].get("score"), Some("Score: {0}"));
    }
}
