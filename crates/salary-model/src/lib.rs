//! Data model for salary disclosure normalization.
//!
//! This crate defines the types shared by every stage of the pipeline:
//!
//! - [`MappingDocument`]: the persisted answer to "which source columns feed
//!   which output field, and how should each field be cleaned up"
//! - [`FieldKind`] and the per-field option types
//! - [`SourceTable`]: an ingested spreadsheet (header plus name-keyed rows)
//! - [`OutputRecord`] and [`OUTPUT_HEADER`]: the normalized output schema
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod field;
pub mod mapping;
pub mod record;
pub mod table;

pub use error::{ModelError, Result};
pub use field::FieldKind;
pub use mapping::{
    EntityMetadata, FieldEntry, FieldMapping, FieldOptions, GenderOptions, HireDateOptions,
    MappingDocument, NameOptions, OUTPUT_FILE_SUFFIX, SalaryOptions, StripOptions,
};
pub use record::{OUTPUT_HEADER, OutputRecord};
pub use table::{SourceRow, SourceTable};
