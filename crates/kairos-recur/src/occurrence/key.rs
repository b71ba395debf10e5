use std::fmt;

use kairos_core::Event;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for occurrence surrogate ids.
const OCCURRENCE_NAMESPACE: Uuid = Uuid::from_u128(0x5d1c_8f0e_2b7a_4c3e_9a61_0f4b_d2e8_7c19);

/// Composite identity of one occurrence: originating series, date, and start
/// time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceKey {
    pub series_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
}

impl OccurrenceKey {
    #[must_use]
    pub fn new(
        series_id: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
    ) -> Self {
        Self {
            series_id: series_id.into(),
            date: date.into(),
            start_time: start_time.into(),
        }
    }

    /// Key addressing `event` as it currently stands.
    #[must_use]
    pub fn of(event: &Event) -> Self {
        Self::new(&event.id, &event.date, &event.start_time)
    }

    /// ## Summary
    /// Stable surrogate id for this occurrence.
    ///
    /// Derived as a UUID v5 of the composite key, so the same occurrence gets
    /// the same id on every expansion without anything being stored.
    #[must_use]
    pub fn surrogate_id(&self) -> Uuid {
        let name = format!("{}\u{1f}{}\u{1f}{}", self.series_id, self.date, self.start_time);
        Uuid::new_v5(&OCCURRENCE_NAMESPACE, name.as_bytes())
    }

    /// Matches on date and start time only. Within one generated sequence
    /// every element carries the same series id.
    pub(crate) fn matches(&self, event: &Event) -> bool {
        event.date == self.date && event.start_time == self.start_time
    }
}

impl fmt::Display for OccurrenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}T{}", self.series_id, self.date, self.start_time)
    }
}
