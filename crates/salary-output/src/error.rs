//! Error types for output writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be created.
    #[error("failed to create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a CSV record failed.
    #[error("failed to write CSV to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Flushing the output failed.
    #[error("failed to flush {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
