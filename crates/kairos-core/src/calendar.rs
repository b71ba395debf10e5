//! Gregorian calendar helpers.
//!
//! ## Summary
//! Pure functions over naive calendar dates: leap-year test, month length,
//! and the canonical `YYYY-MM-DD` text form used for every date exchanged
//! with callers. Time zones never enter here.

use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Returns `true` when `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// ## Summary
/// Returns the number of days in `month` (1-12) of `year`.
///
/// Months outside 1-12 have no days and return 0.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// ## Summary
/// Builds the date `year-month-min(anchor_day, last day of month)`.
///
/// Returns `None` if the month is out of range or the year cannot be
/// represented.
#[must_use]
pub fn clamp_day(year: i32, month: u32, anchor_day: u32) -> Option<NaiveDate> {
    let day = anchor_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Serializes a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// ## Summary
/// Parses strict `YYYY-MM-DD` text into a date.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the text is not shaped like
/// `YYYY-MM-DD`, and `CoreError::InvalidInput` if it is shaped correctly but
/// names a day that does not exist (e.g. `2025-02-29`).
pub fn parse_date(text: &str) -> CoreResult<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(CoreError::ParseError(format!(
            "expected YYYY-MM-DD, got {text:?}"
        )));
    }

    let field = |range: std::ops::Range<usize>| {
        text[range]
            .parse::<u32>()
            .map_err(|e| CoreError::ParseError(format!("{text:?}: {e}")))
    };
    let year = i32::try_from(field(0..4)?)
        .map_err(|e| CoreError::ParseError(format!("{text:?}: {e}")))?;
    let month = field(5..7)?;
    let day = field(8..10)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CoreError::InvalidInput(format!("{text} is not a calendar date")))
}
