//! Ledger Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("At least one row must remain")]
    LastRow,

    #[error("Unknown row field: {0}")]
    UnknownField(String),

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
