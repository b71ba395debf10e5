//! Immutable cursor steps used by the generator.
//!
//! Every transition returns a new value. `None` means the next position cannot
//! be represented as a calendar date, which ends expansion.

use chrono::{Datelike, Days, NaiveDate};
use kairos_core::calendar::{clamp_day, is_leap_year};

/// Position of the expansion loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    /// A real calendar date.
    Date(NaiveDate),
    /// February 29 of a year that has none. Only leap-anchored yearly series
    /// land here, and nothing is emitted for it.
    MissingLeapDay(i32),
}

impl Cursor {
    /// Date compared against the end bound. A missing leap day sorts where
    /// it would roll over to, March 1.
    pub(crate) fn position(self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::MissingLeapDay(year) => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    }
}

pub(crate) fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// Moves `months` months forward from `date`, landing on `anchor_day` or the
/// last day of the target month when it is shorter.
pub(crate) fn add_months_preserve_anchor(
    date: NaiveDate,
    months: u32,
    anchor_day: u32,
) -> Option<NaiveDate> {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    clamp_day(year, month, anchor_day)
}

/// Moves `years` years forward from `date`, re-deriving month and day from
/// the anchor with the same clamp as the monthly step.
pub(crate) fn add_years_preserve_anchor(
    date: NaiveDate,
    years: u32,
    anchor_month: u32,
    anchor_day: u32,
) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    clamp_day(year, anchor_month, anchor_day)
}

/// February 29 of `year + years`, or a missing leap day when that year is
/// not a leap year. Never clamps to February 28.
pub(crate) fn next_leap_year_candidate(year: i32, years: u32) -> Option<Cursor> {
    let year = year.checked_add(i32::try_from(years).ok()?)?;
    if is_leap_year(year) {
        NaiveDate::from_ymd_opt(year, 2, 29).map(Cursor::Date)
    } else {
        Some(Cursor::MissingLeapDay(year))
    }
}
