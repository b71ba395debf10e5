//! Recurrence icon predicate for calendar rendering.

use kairos_core::Event;

/// Returns `true` if at least one event repeats.
#[must_use]
pub fn has_recurring_icon(events: &[Event]) -> bool {
    events.iter().any(|event| event.repeat.is_recurring())
}
