use std::fmt;

use chrono::NaiveDate;

/// Dates are entered and rendered as ISO 8601 calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a booking in whole days. Always at least 1.
pub type Days = u32;

/// Parse a start date strictly as `YYYY-MM-DD`.
/// Surrounding whitespace is ignored, anything else must match the format.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateError::Missing);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DateError::InvalidFormat(input.to_string()))
}

/// Parse a booking length in days.
/// Example: "3" -> 3, " 7 " -> 7, "0" / "-1" / "abc" / "1.5" -> error
pub fn parse_duration(input: &str) -> Result<Days, DurationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DurationError::Missing);
    }

    // Parse wide first so "-1" reports as too short rather than malformed
    let days: i64 = input
        .parse()
        .map_err(|_| DurationError::NotAnInteger(input.to_string()))?;
    if days < 1 {
        return Err(DurationError::TooShort(days));
    }

    Days::try_from(days).map_err(|_| DurationError::OutOfRange(days))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Missing,
    InvalidFormat(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Missing => write!(f, "a start date is required (expected YYYY-MM-DD)"),
            DateError::InvalidFormat(input) => {
                write!(f, "'{}' is not a valid date (expected YYYY-MM-DD)", input)
            }
        }
    }
}

impl std::error::Error for DateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    Missing,
    NotAnInteger(String),
    TooShort(i64),
    OutOfRange(i64),
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::Missing => write!(f, "a duration in days is required"),
            DurationError::NotAnInteger(input) => write!(
                f,
                "'{}' is not a whole number of days (minimum 1 day)",
                input
            ),
            DurationError::TooShort(days) => {
                write!(f, "duration must be at least 1 day, got {}", days)
            }
            DurationError::OutOfRange(days) => {
                write!(f, "a duration of {} days is beyond the supported calendar", days)
            }
        }
    }
}

impl std::error::Error for DurationError {}
