//! Error types for VBO parsing and column computation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for library operations.
pub type VboResult<T> = Result<T, VboError>;

/// Errors that can occur while reading, editing or writing a VBO file.
#[derive(Debug, Error)]
pub enum VboError {
    /// Failed to read or write a file.
    #[error("I/O error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A section the editor relies on is absent.
    #[error("missing [{0}] section")]
    MissingSection(String),

    /// The `[column names]` section holds more than one line.
    #[error("multiple [column names] lines found")]
    MultipleColumnNameLines,

    /// A data row appeared before any column names were declared.
    #[error("data row {line} appears before any column names")]
    DataBeforeColumnNames { line: usize },

    /// A data row does not have one field per column.
    #[error("data row {line} has {found} fields, expected {expected}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A transform read a column that is not in the table.
    #[error("column '{0}' not found in data")]
    MissingColumn(String),

    /// The file declares the same column name twice.
    #[error("column '{0}' is declared more than once")]
    DuplicateColumn(String),

    /// A transform did not add exactly one new column.
    #[error(
        "computed column must add exactly one new column (added: [{}], removed: [{}])",
        added.join(", "),
        removed.join(", ")
    )]
    InvalidComputedColumn {
        added: Vec<String>,
        removed: Vec<String>,
    },

    /// A new column name or value would not survive a write and re-read.
    #[error("column '{column}' has field text {value:?} that is empty or contains whitespace")]
    InvalidFieldText { column: String, value: String },

    /// A transform produced a column of the wrong length.
    #[error("computed column '{column}' has {found} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// The header label is already registered.
    #[error("header column '{0}' already exists in headers")]
    DuplicateHeader(String),

    /// A timestamp could not be decoded as HHMMSS.CC.
    #[error("invalid HHMMSS.CC timestamp '{0}'")]
    InvalidTimestamp(String),

    /// A cell in a numeric column could not be parsed.
    #[error("invalid number '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
}

impl VboError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VboError::Io {
            path: path.into(),
            source,
        }
    }
}
