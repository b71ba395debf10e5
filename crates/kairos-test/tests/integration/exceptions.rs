//! Exception lists applied to fresh expansions.

use kairos_test::fixtures::{dates, monthly_series, weekly_series};
use kairos_test::kairos_recur::{
    EventPatch, ExpansionOptions, OccurrenceKey, SeriesExceptions, expand_events, generate,
};

/// An exception list survives serialization and reproduces the edited series.
#[test_log::test]
fn stored_exceptions_reapply() -> anyhow::Result<()> {
    let seed = monthly_series();
    let mut exceptions = SeriesExceptions::new();
    exceptions.cancel(OccurrenceKey::new("3", "2025-09-01", "09:00"));
    exceptions.modify(
        OccurrenceKey::new("3", "2025-10-01", "09:00"),
        EventPatch {
            start_time: Some("13:00".to_string()),
            end_time: Some("14:00".to_string()),
            ..EventPatch::default()
        },
    );

    let stored = serde_json::to_string(&exceptions)?;
    let loaded: SeriesExceptions = serde_json::from_str(&stored)?;

    let edited = loaded.apply(&generate(&seed)?);

    assert_eq!(dates(&edited), ["2025-08-01", "2025-10-01", "2025-11-01"]);
    assert_eq!(edited[1].start_time, "13:00");
    assert_eq!(edited[1].end_time, "14:00");
    Ok(())
}

/// One exception list can serve a merged multi-series collection.
#[test_log::test]
fn exceptions_apply_per_series() -> anyhow::Result<()> {
    let events = expand_events(&[monthly_series(), weekly_series()], &ExpansionOptions::default())?;
    let mut exceptions = SeriesExceptions::new();
    exceptions.cancel(OccurrenceKey::new("2", "2025-09-01", "09:00"));

    let edited = exceptions.apply(&events);

    assert_eq!(edited.len(), events.len() - 1);
    assert!(edited.iter().any(|e| e.id == "3" && e.date == "2025-09-01"));
    assert!(!edited.iter().any(|e| e.id == "2" && e.date == "2025-09-01"));
    Ok(())
}

/// Surrogate ids stay stable across expansions.
#[test_log::test]
fn surrogate_ids_are_stable() -> anyhow::Result<()> {
    let first: Vec<_> = generate(&weekly_series())?
        .iter()
        .map(|e| OccurrenceKey::of(e).surrogate_id())
        .collect();
    let second: Vec<_> = generate(&weekly_series())?
        .iter()
        .map(|e| OccurrenceKey::of(e).surrogate_id())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(first.windows(2).all(|pair| pair[0] != pair[1]));
    Ok(())
}
