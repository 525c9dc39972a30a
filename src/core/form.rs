//! Form validation and evaluation.
//!
//! The one entry point behind the Calculate button: presence check, then
//! date parsing, then age computation, then message formatting. The error
//! display strings are the exact user-facing messages.

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::{age, date};

/// Raw field contents as read from the form.
#[derive(Debug, Clone, Copy)]
pub struct FormInput<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub date_of_birth: &'a str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// One or more fields is empty. Caught before any parsing.
    #[error("Please fill in all fields")]
    MissingFields,
    /// The date text does not name a real `MM/DD/YYYY` date.
    #[error("Invalid date format")]
    InvalidDate,
}

/// Evaluate a submission against `today`.
///
/// Returns the result message to display, or the error whose display text
/// is shown instead. Holds no state; calling twice with the same inputs and
/// the same `today` gives the same answer.
pub fn evaluate(input: FormInput<'_>, today: NaiveDate) -> Result<String, FormError> {
    if input.first_name.is_empty() || input.last_name.is_empty() || input.date_of_birth.is_empty()
    {
        return Err(FormError::MissingFields);
    }
    let birth = date::parse_birth_date(input.date_of_birth)?;
    let age = age::age_in_years(birth, today);
    Ok(format!(
        "{} {} is {} years old",
        input.first_name, input.last_name, age
    ))
}
