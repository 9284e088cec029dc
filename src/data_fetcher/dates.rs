//! Date and time normalisation for league records
//!
//! The league service is inconsistent about date strings: most records use
//! `DD-MM-YYYY`, some use `YYYY-MM-DD`. Both are accepted everywhere a game
//! date is read.

use crate::constants::dates::{DAY_MONTH_YEAR, YEAR_MONTH_DAY};
use crate::error::AppError;
use chrono::{NaiveDate, NaiveTime};
use std::cmp::Ordering;

const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H.%M"];

/// Parses a game date, trying day-month-year first and year-month-day second.
///
/// # Examples
/// ```
/// use matchday_sheets::data_fetcher::dates::parse_game_date;
///
/// let a = parse_game_date("01-02-2025").unwrap();
/// let b = parse_game_date("2025-02-01").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_game_date("1st of February").is_err());
/// ```
pub fn parse_game_date(value: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DAY_MONTH_YEAR)
        .or_else(|_| NaiveDate::parse_from_str(value, YEAR_MONTH_DAY))
        .map_err(|_| AppError::datetime_parse_error(format!("Unrecognized date format: {value}")))
}

/// Parses the `YYYY-MM-DD` date submitted by the form or the command line.
pub fn parse_form_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), YEAR_MONTH_DAY)
        .map_err(|_| AppError::datetime_parse_error(format!("Invalid date: {value}")))
}

/// Formats a date the way it appears in generated file names: `DD-MM-YYYY`.
pub fn format_file_date(date: NaiveDate) -> String {
    date.format(DAY_MONTH_YEAR).to_string()
}

/// Parses a start time such as `14:30`, `9:00`, `14:30:00` or `14.30`.
pub fn parse_start_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Orders two start time strings by time of day.
///
/// Parsable times compare chronologically, so `9:00` comes before `10:00`
/// even though it does not sort first as a string. Unparsable times go after
/// all parsable ones and compare as plain strings among themselves.
pub fn compare_start_times(a: &str, b: &str) -> Ordering {
    match (parse_start_time(a), parse_start_time(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
