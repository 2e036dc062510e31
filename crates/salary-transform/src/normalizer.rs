//! Mapping-driven row normalization.

use std::time::Instant;

use tracing::{info, trace, warn};

use salary_model::{FieldKind, MappingDocument, OutputRecord, SourceRow, SourceTable};

use crate::cells::collect_cells;
use crate::error::{Result, TransformError};
use crate::normalization::{
    GenderMatch, NameNormalizer, classify_gender, format_salary, normalize_hire_date,
    normalize_name, parse_salary, strip_chars,
};
use crate::report::NormalizeReport;
use crate::sink::RecordSink;

/// Applies one mapping document to source rows.
///
/// Rows are independent: row `i` of the input becomes record `i` of the
/// output, nothing is reordered, filtered or deduplicated.
pub struct Normalizer<'a> {
    mapping: &'a MappingDocument,
    names: &'a dyn NameNormalizer,
}

impl<'a> Normalizer<'a> {
    pub fn new(mapping: &'a MappingDocument, names: &'a dyn NameNormalizer) -> Self {
        Self { mapping, names }
    }

    /// Normalize every row of `table` into `sink`, in source order.
    ///
    /// # Errors
    ///
    /// Stops at the first row whose hire date does not parse, or the first
    /// sink failure. Records already written stay written.
    pub fn run<S>(&self, table: &SourceTable, sink: &mut S) -> Result<NormalizeReport>
    where
        S: RecordSink + ?Sized,
    {
        let start = Instant::now();
        let mut report = NormalizeReport::default();
        for (idx, row) in table.rows.iter().enumerate() {
            let row_number = idx + 1;
            let record = self.normalize_row(row_number, row, &mut report)?;
            sink.write_record(&record)
                .map_err(|source| TransformError::Write {
                    row: row_number,
                    source,
                })?;
            report.rows_written += 1;
        }
        info!(
            entity = %self.mapping.entity_name,
            rows = report.rows_written,
            salary_fallbacks = report.salary_fallbacks.len(),
            unmapped_gender_rows = report.unmapped_gender_rows(),
            duration_ms = start.elapsed().as_millis(),
            "normalization complete"
        );
        Ok(report)
    }

    /// Normalize every row into memory.
    pub fn normalize(&self, table: &SourceTable) -> Result<(Vec<OutputRecord>, NormalizeReport)> {
        let mut records = Vec::with_capacity(table.len());
        let report = self.run(table, &mut records)?;
        Ok((records, report))
    }

    /// Normalize a single row. `row_number` is 1-based and only used for
    /// diagnostics; findings are added to `report`.
    pub fn normalize_row(
        &self,
        row_number: usize,
        row: &SourceRow,
        report: &mut NormalizeReport,
    ) -> Result<OutputRecord> {
        let mapping = self.mapping;
        let field = |kind: FieldKind| collect_cells(row, mapping.columns(kind));

        let name = normalize_name(
            &field(FieldKind::Name),
            mapping.name.options.last_name_space,
            self.names,
        );

        let gender = match classify_gender(&field(FieldKind::Gender), &mapping.gender.options) {
            GenderMatch::Unmapped(value) => {
                if report.record_unmapped_gender(&value) {
                    warn!(row = row_number, "gender value matches neither configured literal");
                }
                value
            }
            matched => matched.into_code(),
        };

        let title = strip_chars(&field(FieldKind::Title), &mapping.title.options);
        let department = strip_chars(&field(FieldKind::Department), &mapping.department.options);

        let raw_date = field(FieldKind::HireDate);
        let format = &mapping.hire_date.options.date_format;
        let hire_date =
            normalize_hire_date(&raw_date, format).map_err(|source| TransformError::HireDate {
                row: row_number,
                value: raw_date.clone(),
                format: format.clone(),
                source,
            })?;

        let raw_salary = field(FieldKind::Salary);
        let salary = match parse_salary(&raw_salary) {
            Some(amount) => format_salary(amount),
            None => {
                warn!(row = row_number, "salary could not be parsed, writing 0.00");
                report.record_salary_fallback(row_number, &raw_salary);
                format_salary(0.0)
            }
        };

        trace!(row = row_number, "row normalized");
        Ok(OutputRecord {
            name,
            gender,
            title,
            department,
            hire_date,
            salary,
            entity: mapping.entity_name.clone(),
            entity_type: mapping.entity_type.clone(),
            received_date: mapping.received_date.clone(),
        })
    }
}
