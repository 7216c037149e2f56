//! CSV parsing of the raw input rows.
//!
//! Only the category column is validated; every other column is ignored.
//! Rows that are too short to reach the category column, or whose category
//! cell is blank, still produce a [`Record`] with no category so they are
//! counted in the unspecified bucket instead of silently dropped.

use crate::error::{LoadError, Result};
use serde::Serialize;

/// One input row, reduced to the field the chart groups by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Trimmed category value, `None` when absent or blank
    pub category: Option<String>,
}

impl Record {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    pub fn unspecified() -> Self {
        Self { category: None }
    }
}

/// Parse CSV text (with a header row) into records keyed by `category_column`.
///
/// # Example CSV
/// ```text
/// Company,Industry,Country
/// Acme Cloud,SaaS,United States
/// ```
pub fn parse_records(csv_data: &str, category_column: &str) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let index = rdr
        .headers()?
        .iter()
        .position(|h| h.trim() == category_column)
        .ok_or_else(|| LoadError::MissingColumn(category_column.to_string()))?;

    let mut records = Vec::new();
    let mut unspecified = 0u32;
    for result in rdr.records() {
        let r = result?;
        let category = r
            .get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        if category.is_none() {
            unspecified += 1;
        }
        records.push(Record { category });
    }
    log::info!(
        "record: Parsed {} records ({} without {})",
        records.len(),
        unspecified,
        category_column
    );
    Ok(records)
}
