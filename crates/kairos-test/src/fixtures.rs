//! Seed events used across integration tests.

use kairos_core::{Event, RepeatRule};

fn seed(id: &str, title: &str, date: &str, start: &str, end: &str, repeat: RepeatRule) -> Event {
    Event::new(id, title, date, start, end).with_repeat(repeat)
}

/// Daily from 2025-08-25 through 2025-08-30.
#[must_use]
pub fn daily_series() -> Event {
    seed(
        "1",
        "Daily standup",
        "2025-08-25",
        "09:00",
        "10:00",
        RepeatRule::daily().until("2025-08-30"),
    )
}

/// Weekly on Mondays from 2025-08-25 through 2025-09-08.
#[must_use]
pub fn weekly_series() -> Event {
    seed(
        "2",
        "Weekly review",
        "2025-08-25",
        "09:00",
        "10:00",
        RepeatRule::weekly().until("2025-09-08"),
    )
}

/// Monthly on the 1st from 2025-08-01 through 2025-11-30.
#[must_use]
pub fn monthly_series() -> Event {
    seed(
        "3",
        "Monthly report",
        "2025-08-01",
        "09:00",
        "10:00",
        RepeatRule::monthly().until("2025-11-30"),
    )
}

/// Yearly on August 25 from 2025 through 2027.
#[must_use]
pub fn yearly_series() -> Event {
    seed(
        "4",
        "Anniversary",
        "2025-08-25",
        "09:00",
        "10:00",
        RepeatRule::yearly().until("2027-08-25"),
    )
}

/// Yearly on February 29 from 2024 through 2028.
#[must_use]
pub fn leap_day_series() -> Event {
    seed(
        "5",
        "Leap day",
        "2024-02-29",
        "10:00",
        "11:00",
        RepeatRule::yearly().until("2028-02-29"),
    )
}

/// Non-repeating events on 2023-05-10 and 2023-05-11.
#[must_use]
pub fn single_events() -> Vec<Event> {
    vec![
        seed("1", "Event 1", "2023-05-10", "10:00", "11:00", RepeatRule::none()),
        seed("2", "Event 2", "2023-05-10", "14:00", "15:00", RepeatRule::none()),
        seed("3", "Event 3", "2023-05-11", "09:00", "10:00", RepeatRule::none()),
    ]
}

/// Dates of a sequence, in order.
#[must_use]
pub fn dates(events: &[Event]) -> Vec<&str> {
    events.iter().map(|event| event.date.as_str()).collect()
}
