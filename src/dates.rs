//! Month names and date string helpers.

use crate::error::{Result, ZooError};
use chrono::NaiveDate;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a 1-based month number.
pub fn month_name(month: u32) -> Result<&'static str> {
    match month {
        1..=12 => Ok(MONTH_NAMES[(month - 1) as usize]),
        _ => Err(ZooError::InvalidMonth(month)),
    }
}

/// `YYYY-MM-DD` from raw components. No calendar validation is done, so
/// a day the API reports is always rendered as reported.
pub fn format_iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

/// Parse a date with a chrono format string (e.g. `%Y-%m-%d`); `None` on bad input.
pub fn parse_date(s: &str, fmt: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), fmt).ok()
}
