//! Error types for mapping document validation.

use thiserror::Error;

use crate::FieldKind;

/// Errors raised while assembling or validating a mapping document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A field has no source columns.
    #[error("field '{field}' does not reference any source column")]
    EmptyField { field: FieldKind },

    /// A field references a column that is not in the source header.
    #[error("field '{field}' references column '{column}' which is not in the source header")]
    UnknownColumn { field: FieldKind, column: String },

    /// A field was never configured.
    #[error("field '{field}' is missing from the mapping")]
    MissingField { field: FieldKind },

    /// Options of one kind were supplied for a field of another kind.
    #[error("options supplied for field '{field}' do not belong to that field")]
    OptionsMismatch { field: FieldKind },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
