//! Row normalizer for salary disclosure spreadsheets.
//!
//! Applies a [`MappingDocument`] to every row of a [`SourceTable`], producing
//! one [`OutputRecord`] per source row in source order. Each output field is
//! built by concatenating its configured source columns and passing the
//! result through that field's transform:
//!
//! | Field | Transform |
//! |-------|-----------|
//! | name | separator repair, then a [`NameNormalizer`] |
//! | gender | map configured literals to `M` / `F`, pass anything else through |
//! | title, department | strip a configured number of leading/trailing characters |
//! | hire_date | parse with the configured pattern, emit `MM/DD/YYYY` |
//! | salary | drop `$` and `,`, emit two decimals, `0.00` when unparseable |
//!
//! [`MappingDocument`]: salary_model::MappingDocument
//! [`SourceTable`]: salary_model::SourceTable
//! [`OutputRecord`]: salary_model::OutputRecord

pub mod cells;
pub mod error;
pub mod normalization;
pub mod normalizer;
pub mod report;
pub mod sink;

pub use cells::collect_cells;
pub use error::{Result, TransformError};
pub use normalization::{
    CanonicalNameNormalizer, GenderMatch, NameNormalizer, classify_gender, format_salary,
    normalize_hire_date, normalize_name, parse_salary, prepare_name_input, strip_chars,
};
pub use normalizer::Normalizer;
pub use report::{NormalizeReport, SalaryFallback};
pub use sink::RecordSink;
