//! Calendar event record and its repeat rule.
//!
//! Dates travel as `YYYY-MM-DD` text and times as `HH:MM` wall-clock text,
//! exactly as the form and storage layers exchange them. Parsing happens at
//! the recurrence boundary, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Repetition frequency of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repeat rule attached to a seed event.
///
/// Created together with its seed and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type", default)]
    pub kind: RepeatType,

    /// Step count between occurrences. Anything below 1 behaves as 1.
    #[serde(default)]
    pub interval: i32,

    /// Inclusive upper bound, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl RepeatRule {
    /// Creates a rule that never repeats.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a daily rule with interval 1.
    #[must_use]
    pub fn daily() -> Self {
        Self::every(RepeatType::Daily)
    }

    /// Creates a weekly rule with interval 1.
    #[must_use]
    pub fn weekly() -> Self {
        Self::every(RepeatType::Weekly)
    }

    /// Creates a monthly rule with interval 1.
    #[must_use]
    pub fn monthly() -> Self {
        Self::every(RepeatType::Monthly)
    }

    /// Creates a yearly rule with interval 1.
    #[must_use]
    pub fn yearly() -> Self {
        Self::every(RepeatType::Yearly)
    }

    fn every(kind: RepeatType) -> Self {
        Self {
            kind,
            interval: 1,
            end_date: None,
        }
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the inclusive end date.
    #[must_use]
    pub fn until(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Interval coerced to at least 1.
    #[must_use]
    pub fn step(&self) -> u32 {
        u32::try_from(self.interval).map_or(1, |n| n.max(1))
    }

    /// Whether the rule repeats at all.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.kind != RepeatType::None
    }

    /// Whether the rule expands past its seed. A recurring rule without an
    /// end date produces only the seed.
    #[must_use]
    pub fn expands(&self) -> bool {
        self.is_recurring() && self.end_date.is_some()
    }
}

/// A calendar event. Seeds and generated occurrences share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatRule,
    /// Reminder lead time in minutes.
    #[serde(default)]
    pub notification_time: i32,
}

impl Event {
    /// Creates a non-repeating event with empty free-text fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RepeatRule::none(),
            notification_time: 0,
        }
    }

    /// Sets the repeat rule.
    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatRule) -> Self {
        self.repeat = repeat;
        self
    }

    /// Copy of this event moved to `date`; every other field is kept,
    /// identifier included.
    #[must_use]
    pub fn with_date(&self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self.clone()
        }
    }
}
