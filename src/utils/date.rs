//! Module for handling date parsing.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats attempted when parsing a date cell, in order.
///
/// The published snapshot stamps its date columns as ISO timestamps
/// (`2010-01-01T00:00:00`); plain ISO dates, US slashed dates, and the
/// compact `YYYYMMDD` form show up in re-exports.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y%m%d",
];

/// Default format list for configuration
#[must_use]
pub fn default_date_formats() -> Vec<String> {
    DATE_FORMATS.iter().map(ToString::to_string).collect()
}

/// Parse a date string with multiple format attempts.
///
/// Fails soft: an unrecognized value yields `None` so the record is
/// dropped downstream instead of aborting the load.
#[must_use]
pub fn parse_date_string(s: &str, formats: &[String]) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_string_formats() {
        let formats = default_date_formats();
        let expected = NaiveDate::from_ymd_opt(2010, 1, 2).unwrap();

        assert_eq!(parse_date_string("2010-01-02", &formats), Some(expected));
        assert_eq!(
            parse_date_string("2010-01-02T00:00:00", &formats),
            Some(expected)
        );
        assert_eq!(parse_date_string("01/02/2010", &formats), Some(expected));
        assert_eq!(parse_date_string("20100102", &formats), Some(expected));
        assert_eq!(parse_date_string(" 2010-01-02 ", &formats), Some(expected));
    }

    #[test]
    fn test_parse_date_string_fails_soft() {
        let formats = default_date_formats();

        assert_eq!(parse_date_string("", &formats), None);
        assert_eq!(parse_date_string("   ", &formats), None);
        assert_eq!(parse_date_string("not a date", &formats), None);
        assert_eq!(parse_date_string("2010-13-40", &formats), None);
    }
}
