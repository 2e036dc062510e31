//! Column collection.

use salary_model::SourceRow;

/// Concatenate the row's values for `columns`, in order, separated by a
/// single space, then trim the result.
pub fn collect_cells(row: &SourceRow, columns: &[String]) -> String {
    let mut payload = String::new();
    for column in columns {
        payload.push_str(row.get(column));
        payload.push(' ');
    }
    payload.trim().to_string()
}
