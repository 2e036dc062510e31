//! Salary cleanup.

/// Parse a salary after removing every `$` and `,`.
///
/// Returns `None` for empty or non-numeric text and for non-finite values.
pub fn parse_salary(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Two-decimal rendering used in the output file.
pub fn format_salary(amount: f64) -> String {
    format!("{amount:.2}")
}
