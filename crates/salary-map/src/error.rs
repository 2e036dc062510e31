//! Error types for mapping operations.

use std::path::PathBuf;

use thiserror::Error;

use salary_model::ModelError;

/// Errors raised while asking the operator for answers.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading from or writing to the terminal failed.
    #[error("prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A scripted answer source ran out of answers.
    #[error("no answer available for prompt: {prompt}")]
    Exhausted { prompt: String },

    /// The operator cancelled the interview.
    #[error("prompt interrupted")]
    Interrupted,
}

/// Errors from mapping elicitation and persistence.
#[derive(Debug, Error)]
pub enum MappingError {
    /// No column index was entered.
    #[error("no column index given")]
    EmptySelection,

    /// A token in the index list is not a number.
    #[error("'{token}' is not a column index")]
    NotAnIndex { token: String },

    /// A column index is outside the header.
    #[error("column index {index} is out of range (header has {len} columns)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// A mapping document already exists and will not be overwritten.
    #[error("mapping already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Failed to read a mapping document.
    #[error("failed to read mapping from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a mapping document.
    #[error("failed to write mapping to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mapping document is not valid JSON for the expected shape.
    #[error("failed to parse mapping from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a mapping document.
    #[error("failed to serialize mapping: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MappingError::NotAnIndex {
            token: "x".to_string(),
        };
        assert_eq!(err.to_string(), "'x' is not a column index");
        let err = MappingError::IndexOutOfRange { index: 9, len: 7 };
        assert_eq!(
            err.to_string(),
            "column index 9 is out of range (header has 7 columns)"
        );
    }
}
