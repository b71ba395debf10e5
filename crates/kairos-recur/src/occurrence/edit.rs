//! Copy-on-write edits of a generated sequence.

use kairos_core::Event;

use super::{EventPatch, OccurrenceKey};

/// ## Summary
/// Returns `occurrences` with the first element matching `key` patched.
///
/// Matching uses date and start time. The result always has the same length
/// as the input; a key that matches nothing returns an equal sequence.
#[must_use]
pub fn update_recurring_occurrence(
    occurrences: &[Event],
    key: &OccurrenceKey,
    patch: &EventPatch,
) -> Vec<Event> {
    let mut updated = occurrences.to_vec();
    if let Some(event) = updated.iter_mut().find(|event| key.matches(event)) {
        *event = patch.apply(event);
    } else {
        tracing::debug!(%key, "No occurrence to update");
    }
    updated
}

/// ## Summary
/// Returns `occurrences` without the first element matching `key`.
///
/// At most one element is removed and order is preserved. A key that matches
/// nothing returns an equal sequence.
#[must_use]
pub fn delete_recurring_occurrence(occurrences: &[Event], key: &OccurrenceKey) -> Vec<Event> {
    let mut remaining = occurrences.to_vec();
    if let Some(index) = remaining.iter().position(|event| key.matches(event)) {
        remaining.remove(index);
    } else {
        tracing::debug!(%key, "No occurrence to delete");
    }
    remaining
}
