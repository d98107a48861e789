//! Spreadsheet feed collaborator: fetches row-groups (subsheets) from the
//! remote spreadsheet as CSV and exposes them as ordered rows of
//! (column-name, cell-value) pairs.
//!
//! The rest of the pipeline never sees HTTP or CSV; it consumes `Row`
//! values. Which column is the key column is a naming convention applied by
//! the builder, not something encoded here.

use crate::config::Config;
use thiserror::Error;
use tracing::info;

/// One cell of a row: the column it came from plus its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub column: String,
    pub value: String,
}

impl Cell {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// One row of a row-group, cells in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

#[derive(Debug, Error)]
pub enum SheetFeedError {
    #[error("failed to request subsheet {index}: {source}")]
    Request {
        index: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("spreadsheet feed returned {status} for subsheet {index}")]
    Status {
        index: u32,
        status: reqwest::StatusCode,
    },

    #[error("failed to parse subsheet {index} as CSV: {source}")]
    Csv {
        index: u32,
        #[source]
        source: csv::Error,
    },
}

/// HTTP client for the spreadsheet CSV export endpoint.
pub struct SheetClient {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
}

impl SheetClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.sheets_base_url.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
        }
    }

    /// Fetch one row-group by 1-based subsheet index.
    pub async fn fetch_row_group(&self, index: u32) -> Result<Vec<Row>, SheetFeedError> {
        let url = format!(
            "{}/spreadsheets/d/{}/export?format=csv&gid={}",
            self.base_url,
            self.spreadsheet_id,
            index - 1
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SheetFeedError::Request { index, source })?;

        if !response.status().is_success() {
            return Err(SheetFeedError::Status {
                index,
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SheetFeedError::Request { index, source })?;

        let rows = parse_csv_rows(&body).map_err(|source| SheetFeedError::Csv { index, source })?;
        info!("Fetched {} rows from subsheet {}", rows.len(), index);
        Ok(rows)
    }
}

/// Parse CSV text into rows. The header row supplies column names; each
/// data row becomes one `Row` with cells in header order.
pub fn parse_csv_rows(body: &str) -> Result<Vec<Row>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| Cell::new(column.clone(), value))
            .collect();
        rows.push(Row::new(cells));
    }
    Ok(rows)
}
