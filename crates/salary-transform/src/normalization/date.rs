//! Hire date reformatting.

use chrono::{NaiveDate, NaiveDateTime, ParseError};

/// Output pattern for hire dates.
pub const OUTPUT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse `value` with the strptime-style `format` and reformat it as
/// `MM/DD/YYYY`.
///
/// Patterns carrying time fields are accepted; the time part is dropped.
///
/// # Errors
///
/// Returns the date parse error when `value` does not match `format`.
pub fn normalize_hire_date(value: &str, format: &str) -> Result<String, ParseError> {
    let date = NaiveDate::parse_from_str(value, format).or_else(|date_err| {
        NaiveDateTime::parse_from_str(value, format)
            .map(|datetime| datetime.date())
            .map_err(|_| date_err)
    })?;
    Ok(date.format(OUTPUT_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpadded_us_date() {
        assert_eq!(normalize_hire_date("7/22/2013", "%m/%d/%Y").unwrap(), "07/22/2013");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(normalize_hire_date("2001-02-03", "%Y-%m-%d").unwrap(), "02/03/2001");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(normalize_hire_date("03-Feb-2001", "%d-%b-%Y").unwrap(), "02/03/2001");
    }

    #[test]
    fn test_datetime_pattern_keeps_date() {
        assert_eq!(
            normalize_hire_date("2013-07-22 08:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
            "07/22/2013"
        );
    }

    #[test]
    fn test_invalid_date_fails() {
        assert!(normalize_hire_date("not-a-date", "%m/%d/%Y").is_err());
        assert!(normalize_hire_date("", "%m/%d/%Y").is_err());
        assert!(normalize_hire_date("2/30/2013", "%m/%d/%Y").is_err());
    }
}
