//! Destination for normalized records.

use salary_model::OutputRecord;

/// Receives output records one at a time, in source order.
pub trait RecordSink {
    fn write_record(&mut self, record: &OutputRecord) -> std::io::Result<()>;
}

impl RecordSink for Vec<OutputRecord> {
    fn write_record(&mut self, record: &OutputRecord) -> std::io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
