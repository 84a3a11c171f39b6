//! Name-keyed storage for the `[data]` section.

use std::collections::HashMap;

use crate::error::{VboError, VboResult};
use crate::timecode;

/// Column values keyed by column name.
///
/// Every value is kept as the exact text written to the file (leading
/// zeros, signs, fixed decimals), so unchanged columns round-trip
/// byte-for-byte. Field order is not stored here; see
/// [`Table::column_names`](super::Table::column_names).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnData {
    columns: HashMap<String, Vec<String>>,
    rows: usize,
}

impl ColumnData {
    /// Create empty storage for `rows` rows.
    pub fn new(rows: usize) -> Self {
        Self {
            columns: HashMap::new(),
            rows,
        }
    }

    /// Number of rows (`nval`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns are stored.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether a column exists.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Iterate over the stored column names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Raw text values of a column.
    ///
    /// A column holding other than [`rows`](Self::rows) values is reported
    /// as [`VboError::ColumnLengthMismatch`], so row-indexed readers never
    /// run past its end.
    pub fn get(&self, name: &str) -> VboResult<&[String]> {
        let values = self
            .columns
            .get(name)
            .ok_or_else(|| VboError::MissingColumn(name.to_string()))?;
        if values.len() != self.rows {
            return Err(VboError::ColumnLengthMismatch {
                column: name.to_string(),
                expected: self.rows,
                found: values.len(),
            });
        }
        Ok(values.as_slice())
    }

    /// Insert or replace a column.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.columns.insert(name.into(), values);
    }

    /// Remove a column, returning its values if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.columns.remove(name)
    }

    /// Parse a column as floating-point values.
    pub fn floats(&self, name: &str) -> VboResult<Vec<f64>> {
        self.get(name)?
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value.trim().parse::<f64>().map_err(|_| VboError::InvalidNumber {
                    column: name.to_string(),
                    row,
                    value: value.clone(),
                })
            })
            .collect()
    }

    /// Decode a `HHMMSS.CC` time column to milliseconds.
    pub fn milliseconds(&self, name: &str) -> VboResult<Vec<i64>> {
        self.get(name)?
            .iter()
            .map(|value| timecode::to_milliseconds(value))
            .collect()
    }
}
