//! Data-quality findings collected during a run.

use std::collections::BTreeMap;

/// A salary cell that could not be parsed and was written as `0.00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryFallback {
    /// 1-based data row number.
    pub row: usize,
    /// Collected text before cleanup.
    pub raw: String,
}

/// Summary of one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Number of records handed to the sink.
    pub rows_written: usize,
    /// Rows whose salary fell back to `0.00`.
    pub salary_fallbacks: Vec<SalaryFallback>,
    /// Gender values matching neither configured literal, with row counts.
    pub unmapped_genders: BTreeMap<String, usize>,
}

impl NormalizeReport {
    /// Total rows whose gender passed through unmapped.
    pub fn unmapped_gender_rows(&self) -> usize {
        self.unmapped_genders.values().sum()
    }

    /// True when no fallback or pass-through happened.
    pub fn is_clean(&self) -> bool {
        self.salary_fallbacks.is_empty() && self.unmapped_genders.is_empty()
    }

    pub(crate) fn record_salary_fallback(&mut self, row: usize, raw: &str) {
        self.salary_fallbacks.push(SalaryFallback {
            row,
            raw: raw.to_string(),
        });
    }

    /// Returns true the first time `value` is seen.
    pub(crate) fn record_unmapped_gender(&mut self, value: &str) -> bool {
        let count = self.unmapped_genders.entry(value.to_string()).or_insert(0);
        *count += 1;
        *count == 1
    }
}
