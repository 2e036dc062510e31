//! Error types for row normalization.

use thiserror::Error;

/// Errors that abort a normalization run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A hire date did not match the configured pattern.
    #[error("row {row}: hire date '{value}' does not match format '{format}': {source}")]
    HireDate {
        row: usize,
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The record sink failed to accept a row.
    #[error("row {row}: failed to write output record: {source}")]
    Write {
        row: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, TransformError>;
