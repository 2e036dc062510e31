//! CSV reading into a [`SourceTable`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use salary_model::SourceTable;

use crate::error::{IngestError, Result};

/// Normalizes a header cell: trims whitespace and a leading UTF-8 BOM.
fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Read a CSV file with a header row into memory.
///
/// Rows shorter than the header are padded with empty cells and longer rows
/// are truncated. Every data record becomes a row, blank ones included; cell
/// text is kept verbatim.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] / [`IngestError::FileRead`] when the
/// file cannot be opened, [`IngestError::EmptyCsv`] when there is no header,
/// [`IngestError::DuplicateHeader`] when column names repeat and
/// [`IngestError::CsvParse`] for malformed records.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_source_table_from_reader(file, path)
}

/// Read CSV content from any reader. `path` is used for error context only.
pub fn read_source_table_from_reader<R: Read>(input: R, path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.map_err(|source| csv_error(path, 1, source))?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let header: Vec<String> = header_record.iter().map(normalize_header).collect();
    if header.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut seen = BTreeMap::new();
    for (index, column) in header.iter().enumerate() {
        if let Some(&first) = seen.get(column.as_str()) {
            return Err(IngestError::DuplicateHeader {
                column: column.clone(),
                first,
                second: index,
                path: path.to_path_buf(),
            });
        }
        seen.insert(column.as_str(), index);
    }

    let mut table = SourceTable::new(header);
    for (idx, record) in records.enumerate() {
        // Record 1 is the header.
        let position = idx as u64 + 2;
        let record = record.map_err(|source| csv_error(path, position, source))?;
        let values: Vec<String> = record.iter().map(str::to_string).collect();
        table.push_values(&values);
    }

    debug!(
        path = %path.display(),
        columns = table.header.len(),
        rows = table.len(),
        "source table loaded"
    );
    Ok(table)
}

fn csv_error(path: &Path, record: u64, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        record,
        source,
    }
}
