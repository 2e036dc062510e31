//! Streamed CSV writer for output records.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use salary_model::{MappingDocument, OUTPUT_HEADER, OutputRecord};
use salary_transform::RecordSink;

use crate::error::{OutputError, Result};

/// Output file location for `mapping` inside `dir`.
pub fn output_path(dir: &Path, mapping: &MappingDocument) -> PathBuf {
    dir.join(mapping.output_file_name())
}

/// Writes the fixed header on creation, then one row per record.
pub struct CsvRecordWriter<W: Write> {
    writer: csv::Writer<W>,
    path: PathBuf,
    rows: usize,
}

impl CsvRecordWriter<File> {
    /// Create (or truncate) the file at `path` and write the header.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_writer(file, path)
    }
}

impl<W: Write> CsvRecordWriter<W> {
    fn from_writer(inner: W, path: &Path) -> Result<Self> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer
            .write_record(OUTPUT_HEADER)
            .map_err(|source| OutputError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows: 0,
        })
    }

    /// Flush and report how many records were written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|source| OutputError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), rows = self.rows, "output written");
        Ok(self.rows)
    }
}

impl<W: Write> RecordSink for CsvRecordWriter<W> {
    fn write_record(&mut self, record: &OutputRecord) -> io::Result<()> {
        self.writer.write_record(record.values())?;
        self.rows += 1;
        Ok(())
    }
}
