//! Invariants that hold across many seeds and rules.

use chrono::{Datelike, NaiveDate};
use kairos_test::kairos_core::calendar::{days_in_month, is_leap_year, parse_date};
use kairos_test::kairos_core::{Event, RepeatRule};
use kairos_test::kairos_recur::generate;

fn seed(date: &str, repeat: RepeatRule) -> Event {
    Event::new("p", "Property", date, "08:30", "09:00").with_repeat(repeat)
}

fn parsed(events: &[Event]) -> anyhow::Result<Vec<NaiveDate>> {
    Ok(events
        .iter()
        .map(|event| parse_date(&event.date))
        .collect::<Result<_, _>>()?)
}

/// Non-expanding rules return exactly the seed.
#[test_log::test]
fn non_expanding_rules_return_seed() -> anyhow::Result<()> {
    let rules = [
        RepeatRule::none(),
        RepeatRule::none().until("2030-01-01"),
        RepeatRule::daily(),
        RepeatRule::weekly().with_interval(3),
        RepeatRule::monthly(),
        RepeatRule::yearly(),
    ];

    for rule in rules {
        let seed = seed("2025-03-15", rule);
        assert_eq!(generate(&seed)?, vec![seed]);
    }
    Ok(())
}

/// Daily and weekly steps are exact and stop at the last step within the end date.
#[test_log::test]
fn fixed_day_steps_are_exact() -> anyhow::Result<()> {
    let end = "2026-02-10";
    let end_date = parse_date(end)?;

    for interval in 1..=5 {
        for (rule, days) in [
            (RepeatRule::daily(), i64::from(interval)),
            (RepeatRule::weekly(), 7 * i64::from(interval)),
        ] {
            let dates = parsed(&generate(&seed(
                "2025-11-28",
                rule.with_interval(interval).until(end),
            ))?)?;

            assert!(!dates.is_empty());
            for pair in dates.windows(2) {
                assert_eq!((pair[1] - pair[0]).num_days(), days);
            }
            let last = *dates.last().expect("non-empty");
            assert!(last <= end_date);
            assert!((end_date - last).num_days() < days);
        }
    }
    Ok(())
}

/// Monthly anchors beyond a month's length land on that month's last day.
#[test_log::test]
fn monthly_clamp_is_independent_of_history() -> anyhow::Result<()> {
    for anchor in [29, 30, 31] {
        for interval in [1, 2, 5] {
            let start = format!("2023-01-{anchor}");
            let dates = parsed(&generate(&seed(
                &start,
                RepeatRule::monthly().with_interval(interval).until("2026-12-31"),
            ))?)?;

            for date in dates {
                let expected = anchor.min(days_in_month(date.year(), date.month()));
                assert_eq!(date.day(), expected, "anchor {anchor}, interval {interval}, {date}");
            }
        }
    }
    Ok(())
}

/// Yearly series keep the anchor's month and day in every stepped year.
#[test_log::test]
fn yearly_keeps_anchor_every_step() -> anyhow::Result<()> {
    for interval in 1..=3 {
        let dates = parsed(&generate(&seed(
            "2021-12-31",
            RepeatRule::yearly().with_interval(interval).until("2035-12-31"),
        ))?)?;

        let expected_years: Vec<i32> = (2021..=2035).step_by(usize::try_from(interval)?).collect();
        let years: Vec<i32> = dates.iter().map(Datelike::year).collect();
        assert_eq!(years, expected_years);
        assert!(dates.iter().all(|d| d.month() == 12 && d.day() == 31));
    }
    Ok(())
}

/// A February 29 anchor never yields another day or a non-leap year.
#[test_log::test]
fn leap_anchor_never_leaves_february_29() -> anyhow::Result<()> {
    for interval in 1..=8 {
        let dates = parsed(&generate(&seed(
            "2000-02-29",
            RepeatRule::yearly().with_interval(interval).until("2120-12-31"),
        ))?)?;

        assert_eq!(dates.first().map(Datelike::year), Some(2000));
        for date in dates {
            assert_eq!((date.month(), date.day()), (2, 29));
            assert!(is_leap_year(date.year()));
            assert_eq!((date.year() - 2000) % interval, 0);
        }
    }
    Ok(())
}

/// Expansion output is identical across calls.
#[test_log::test]
fn generation_is_deterministic() -> anyhow::Result<()> {
    let seed = seed("2024-01-31", RepeatRule::monthly().with_interval(3).until("2030-01-31"));
    assert_eq!(generate(&seed)?, generate(&seed)?);
    Ok(())
}
