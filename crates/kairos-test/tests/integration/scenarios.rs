//! Expansion scenarios for each repeat type.

use kairos_test::fixtures::{
    daily_series, dates, leap_day_series, monthly_series, weekly_series, yearly_series,
};
use kairos_test::kairos_recur::generate;

/// Daily series covers every day through the end date.
#[test_log::test]
fn daily_until_end_date() -> anyhow::Result<()> {
    let events = generate(&daily_series())?;

    assert_eq!(
        dates(&events),
        ["2025-08-25", "2025-08-26", "2025-08-27", "2025-08-28", "2025-08-29", "2025-08-30"]
    );
    Ok(())
}

/// Weekly series lands on the same weekday, end date included.
#[test_log::test]
fn weekly_until_end_date() -> anyhow::Result<()> {
    let events = generate(&weekly_series())?;

    assert_eq!(dates(&events), ["2025-08-25", "2025-09-01", "2025-09-08"]);
    Ok(())
}

/// Monthly series keeps the first of each month.
#[test_log::test]
fn monthly_until_end_date() -> anyhow::Result<()> {
    let events = generate(&monthly_series())?;

    assert_eq!(dates(&events), ["2025-08-01", "2025-09-01", "2025-10-01", "2025-11-01"]);
    Ok(())
}

/// Yearly series keeps month and day.
#[test_log::test]
fn yearly_until_end_date() -> anyhow::Result<()> {
    let events = generate(&yearly_series())?;

    assert_eq!(dates(&events), ["2025-08-25", "2026-08-25", "2027-08-25"]);
    Ok(())
}

/// February 29 series appears only in leap years.
#[test_log::test]
fn leap_day_only_in_leap_years() -> anyhow::Result<()> {
    let events = generate(&leap_day_series())?;
    tracing::debug!(count = events.len(), "Expanded leap day series");

    assert_eq!(dates(&events), ["2024-02-29", "2028-02-29"]);
    assert!(events.iter().all(|e| e.start_time == "10:00"));
    Ok(())
}

/// Every occurrence keeps the seed's time slot and identifier.
#[test_log::test]
fn occurrences_keep_seed_time_slot() -> anyhow::Result<()> {
    let seed = daily_series();
    let events = generate(&seed)?;
    tracing::debug!(series = %seed.id, count = events.len(), "Expanded daily series");

    for event in &events {
        assert_eq!(event.id, seed.id);
        assert_eq!(event.start_time, seed.start_time);
        assert_eq!(event.end_time, seed.end_time);
        assert_eq!(event.title, seed.title);
    }
    Ok(())
}
