// File: crates/chartkit-core/src/error.rs
// Summary: Error taxonomy shared by the loader, classifier, binder and chart adapters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No records to classify or bind.
    #[error("dataset has no records")]
    EmptyDataset,

    /// Referenced column missing from a record, or its value cannot be coerced.
    #[error("invalid data in column '{column}' at row {row}: {reason}")]
    InvalidColumnData {
        column: String,
        row: usize,
        reason: String,
    },

    #[error("unsupported file extension '{0}' (expected json, csv or tsv)")]
    UnsupportedExtension(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Band scales map discrete keys and have no continuous inverse.
    #[error("ordinal scales cannot be inverted")]
    UnsupportedInversion,

    #[error("invalid chart configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ChartError {
    pub(crate) fn missing_column(column: &str, row: usize) -> Self {
        ChartError::InvalidColumnData {
            column: column.to_string(),
            row,
            reason: "column absent from record".to_string(),
        }
    }

    pub(crate) fn not_numeric(column: &str, row: usize, raw: &str) -> Self {
        ChartError::InvalidColumnData {
            column: column.to_string(),
            row,
            reason: format!("value '{raw}' is not numeric"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
