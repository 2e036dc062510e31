//! In-memory source table.

use std::collections::BTreeMap;

/// One source row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub cells: BTreeMap<String, String>,
}

impl SourceRow {
    /// Build a row by pairing header names with cell values. Missing trailing
    /// cells become empty strings.
    pub fn from_cells(header: &[String], values: &[String]) -> Self {
        let cells = header
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let value = values.get(idx).cloned().unwrap_or_default();
                (column.clone(), value)
            })
            .collect();
        Self { cells }
    }

    /// Raw value of `column`, or an empty string if the row has no such cell.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }
}

/// A spreadsheet read entirely into memory: ordered header plus rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub header: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl SourceTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a row given as values in header order.
    pub fn push_values(&mut self, values: &[String]) {
        let row = SourceRow::from_cells(&self.header, values);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn short_rows_read_as_empty() {
        let mut table = SourceTable::new(header(&["A", "B"]));
        table.push_values(&["1".to_string()]);
        assert_eq!(table.rows[0].get("A"), "1");
        assert_eq!(table.rows[0].get("B"), "");
        assert_eq!(table.rows[0].get("C"), "");
    }
}
