//! Error types for source table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path} at record {record}: {source}")]
    CsvParse {
        path: PathBuf,
        record: u64,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Two header cells share a name, so rows cannot be keyed by column.
    #[error("duplicate column '{column}' at indices {first} and {second} in header of {path}")]
    DuplicateHeader {
        column: String,
        first: usize,
        second: usize,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
