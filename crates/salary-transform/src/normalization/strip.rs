//! Character stripping for title and department.

use salary_model::StripOptions;

/// Trim, drop `remove_before` leading and `remove_after` trailing characters,
/// then trim again.
///
/// Counts are in characters, not bytes. A count larger than the remaining
/// text empties it; a count of zero is a no-op.
pub fn strip_chars(value: &str, options: &StripOptions) -> String {
    let trimmed = value.trim();
    if options.is_noop() {
        return trimmed.to_string();
    }

    let mut chars: Vec<char> = trimmed.chars().collect();
    if let Some(before) = options.remove_before {
        chars.drain(..before.min(chars.len()));
    }
    if let Some(after) = options.remove_after {
        chars.truncate(chars.len().saturating_sub(after));
    }
    chars.into_iter().collect::<String>().trim().to_string()
}
