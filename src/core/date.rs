//! Birth date parsing against the fixed `MM/DD/YYYY` pattern.
//!
//! The pattern is a compatibility contract: two-digit month, two-digit day,
//! four-digit year, separated by `/`. Parsing is strict. chrono alone would
//! accept single-digit fields, so the shape is checked first; chrono then
//! rejects impossible calendar dates (month 13, Feb 30) instead of rolling
//! them over into the next month or year.

use chrono::NaiveDate;

use crate::core::form::FormError;

/// Format string for [`NaiveDate::parse_from_str`].
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Placeholder shown in the date field while it is empty.
pub const DATE_PLACEHOLDER: &str = "MM/DD/YYYY";

/// Parse a date-of-birth string, strictly.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, FormError> {
    if !matches_shape(text) {
        return Err(FormError::InvalidDate);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| FormError::InvalidDate)
}

/// `DD/DD/DDDD` where `D` is an ASCII digit.
fn matches_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'/',
        _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_well_formed_dates() {
        assert_eq!(parse_birth_date("01/15/1990"), Ok(date(1990, 1, 15)));
        assert_eq!(parse_birth_date("12/31/2020"), Ok(date(2020, 12, 31)));
        // Leap day in a leap year is a real date
        assert_eq!(parse_birth_date("02/29/2000"), Ok(date(2000, 2, 29)));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        // Strict policy: no overflow rolling, impossible fields fail outright
        assert_eq!(parse_birth_date("13/01/2020"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("15/01/1990"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("01/32/2020"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("00/10/2000"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("01/00/2000"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("02/30/2001"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("02/29/2001"), Err(FormError::InvalidDate));
    }

    #[test]
    fn rejects_malformed_shapes() {
        assert_eq!(parse_birth_date(""), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("abc"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("13-32-2020"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("1/15/1990"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("01/15/90"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date(" 01/15/1990"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("01/15/1990 "), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("01/15/1990x"), Err(FormError::InvalidDate));
        assert_eq!(parse_birth_date("01151990"), Err(FormError::InvalidDate));
    }
}
