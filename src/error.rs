//! Error types for table construction and rendering

use thiserror::Error;

/// Errors raised while building, generating or rendering a table
#[derive(Debug, Error)]
pub enum TableError {
    /// A column's length differs from the first column's length
    #[error("Length of {column} does not match other columns (expected {expected} values, found {found})")]
    InvalidShape {
        column: String,
        expected: usize,
        found: usize,
    },

    /// The same column name was supplied twice
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Format name outside the supported set
    #[error("Unknown table format: {0}")]
    UnknownFormat(String),

    /// Field name with no matching fake-data provider
    #[error("Unknown fake data field: {0}")]
    UnknownFakeField(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Name of the column that failed validation, if any
    pub fn column(&self) -> Option<&str> {
        match self {
            TableError::InvalidShape { column, .. } | TableError::DuplicateColumn(column) => {
                Some(column.as_str())
            }
            _ => None,
        }
    }
}
