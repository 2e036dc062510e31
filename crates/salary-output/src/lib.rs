//! Normalized salary CSV output.
//!
//! Output files are named after the entity (see
//! [`MappingDocument::output_file_name`]) and always start with the fixed
//! [`OUTPUT_HEADER`]. Records are appended one at a time as the normalizer
//! produces them.
//!
//! [`MappingDocument::output_file_name`]: salary_model::MappingDocument::output_file_name
//! [`OUTPUT_HEADER`]: salary_model::OUTPUT_HEADER

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{CsvRecordWriter, output_path};
