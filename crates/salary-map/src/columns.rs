//! Column index selection.

use crate::error::{MappingError, Result};

/// Parse a comma-separated list of column indices, keeping the entered
/// order. Whitespace around tokens is ignored.
///
/// # Errors
///
/// Returns [`MappingError::EmptySelection`] for a blank answer,
/// [`MappingError::NotAnIndex`] naming the first non-numeric token, and
/// [`MappingError::IndexOutOfRange`] for an index past the header.
pub fn parse_column_indices(input: &str, header: &[String]) -> Result<Vec<usize>> {
    if input.trim().is_empty() {
        return Err(MappingError::EmptySelection);
    }
    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            let index: usize = token.parse().map_err(|_| MappingError::NotAnIndex {
                token: token.to_string(),
            })?;
            if index >= header.len() {
                return Err(MappingError::IndexOutOfRange {
                    index,
                    len: header.len(),
                });
            }
            Ok(index)
        })
        .collect()
}
