//! Whole-year age computation.

use chrono::{Datelike, NaiveDate};

/// Completed years between `birth` and `today`.
///
/// Counts the difference in calendar years, minus one while this year's
/// anniversary is still ahead. The comparison is on (month, day) pairs, so a
/// Feb 29 birthday counts from Mar 1 in non-leap years. Total over any pair
/// of dates: a birth date after `today` yields a zero or negative result
/// rather than an error.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
