//! Salary disclosure ingestion.
//!
//! Loads a CSV spreadsheet with a header row into a [`SourceTable`]. The
//! whole file is read into memory; column names are arbitrary and rows are
//! keyed by them.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use salary_ingest::read_source_table;
//!
//! let table = read_source_table(Path::new("austin_isd.csv"))?;
//! println!("{} columns, {} rows", table.header.len(), table.len());
//! ```
//!
//! [`SourceTable`]: salary_model::SourceTable

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{read_source_table, read_source_table_from_reader};
