//! Seed-to-occurrence expansion.

use chrono::{Datelike, NaiveDate};
use kairos_core::calendar::{format_date, parse_date};
use kairos_core::{Event, RepeatType};

use super::ExpansionOptions;
use super::cursor::{
    Cursor, add_days, add_months_preserve_anchor, add_years_preserve_anchor,
    next_leap_year_candidate,
};
use crate::error::{ExpansionError, ExpansionResult};

/// Fixed parameters of one expansion, captured from the seed once.
#[derive(Debug, Clone, Copy)]
struct Series {
    kind: RepeatType,
    step: u32,
    anchor_day: u32,
    anchor_month: u32,
    leap_anchor: bool,
}

impl Series {
    fn new(kind: RepeatType, step: u32, start: NaiveDate) -> Self {
        let anchor_day = start.day();
        let anchor_month = start.month();
        Self {
            kind,
            step,
            anchor_day,
            anchor_month,
            leap_anchor: anchor_month == 2 && anchor_day == 29,
        }
    }

    /// Cursor following an emitted occurrence on `date`.
    fn advance(self, date: NaiveDate) -> Option<Cursor> {
        let step = u64::from(self.step);
        match self.kind {
            RepeatType::Daily => add_days(date, step).map(Cursor::Date),
            RepeatType::Weekly => add_days(date, 7 * step).map(Cursor::Date),
            RepeatType::Monthly => {
                add_months_preserve_anchor(date, self.step, self.anchor_day).map(Cursor::Date)
            }
            RepeatType::Yearly if self.leap_anchor => {
                next_leap_year_candidate(date.year(), self.step)
            }
            RepeatType::Yearly => {
                add_years_preserve_anchor(date, self.step, self.anchor_month, self.anchor_day)
                    .map(Cursor::Date)
            }
            RepeatType::None => None,
        }
    }
}

/// ## Summary
/// Expands a seed event into its ordered occurrences using default options.
///
/// See [`generate_with_options`].
///
/// ## Errors
/// Returns an error if the seed date or end date is not a calendar date, or
/// if the series is longer than the default instance limit.
pub fn generate(seed: &Event) -> ExpansionResult<Vec<Event>> {
    generate_with_options(seed, &ExpansionOptions::default())
}

/// ## Summary
/// Expands a seed event into its ordered occurrences.
///
/// A seed whose rule is `none` or has no end date yields exactly itself.
/// Otherwise occurrences run from the seed date up to and including the end
/// date. Each occurrence is the seed with only its date replaced.
///
/// Monthly and yearly steps re-derive the day from the seed's anchor and
/// clamp it to the target month's length. A yearly series anchored on
/// February 29 skips non-leap years instead of clamping.
///
/// ## Errors
///
/// Returns an error if:
/// - The seed date or the rule's end date is not `YYYY-MM-DD`
/// - More than `options.max_instances` occurrences fall inside the window
///
/// ## Side Effects
///
/// None - the seed is never modified and repeated calls yield equal output.
#[tracing::instrument(skip_all, fields(series_id = %seed.id, repeat = %seed.repeat.kind))]
pub fn generate_with_options(
    seed: &Event,
    options: &ExpansionOptions,
) -> ExpansionResult<Vec<Event>> {
    let rule = &seed.repeat;
    let end_text = match rule.end_date.as_deref() {
        Some(end_text) if rule.is_recurring() => end_text,
        _ => {
            tracing::debug!("Rule does not expand, returning seed only");
            return single_occurrence(seed, options);
        }
    };

    let start = parse_field("date", &seed.date)?;
    let end = parse_field("endDate", end_text)?;
    let series = Series::new(rule.kind, rule.step(), start);

    let mut occurrences = Vec::new();
    let mut cursor = Some(Cursor::Date(start));

    while let Some(current) = cursor {
        let Some(position) = current.position() else {
            break;
        };
        if position > end || options.is_past_range(position) {
            break;
        }

        let date = match current {
            Cursor::Date(date) => date,
            Cursor::MissingLeapDay(year) => {
                tracing::trace!(year, "Skipping non-leap year for February 29 anchor");
                cursor = next_leap_year_candidate(year, series.step);
                continue;
            }
        };

        if options.contains(date) {
            if occurrences.len() >= options.max_instances {
                tracing::warn!(limit = options.max_instances, "Occurrence limit reached");
                return Err(ExpansionError::TooManyOccurrences(options.max_instances));
            }
            occurrences.push(seed.with_date(format_date(date)));
        }

        cursor = series.advance(date);
    }

    tracing::debug!(count = occurrences.len(), "Expanded recurring event");
    Ok(occurrences)
}

/// ## Summary
/// Expands every event of a collection and merges the results.
///
/// Occurrences are ordered by date, then start time. Overlapping series are
/// not deduplicated.
///
/// ## Errors
/// Returns the first expansion error encountered.
pub fn expand_events(events: &[Event], options: &ExpansionOptions) -> ExpansionResult<Vec<Event>> {
    let mut occurrences = Vec::new();
    for event in events {
        occurrences.extend(generate_with_options(event, options)?);
    }
    occurrences.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));
    Ok(occurrences)
}

fn single_occurrence(seed: &Event, options: &ExpansionOptions) -> ExpansionResult<Vec<Event>> {
    if options.has_range() && !options.contains(parse_field("date", &seed.date)?) {
        return Ok(Vec::new());
    }
    Ok(vec![seed.clone()])
}

fn parse_field(field: &'static str, value: &str) -> ExpansionResult<NaiveDate> {
    parse_date(value).map_err(|source| ExpansionError::InvalidDateInput {
        field,
        value: value.to_string(),
        source,
    })
}
