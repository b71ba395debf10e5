//! Persistable per-occurrence exceptions for recurring series.
//!
//! ## Summary
//! Instead of storing edited occurrences, callers keep the seed plus a
//! [`SeriesExceptions`] list keyed by each occurrence's original
//! [`OccurrenceKey`]. Applying the list to a fresh expansion reproduces the
//! edited series regardless of array position.

use std::collections::BTreeMap;

use kairos_core::Event;
use serde::{Deserialize, Serialize};

use super::{EventPatch, OccurrenceKey};

/// Change recorded against one occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Exception {
    /// Occurrence stays, with fields replaced.
    Modified { patch: Box<EventPatch> },
    /// Occurrence is removed.
    Cancelled,
}

/// Exceptions keyed by the original series id, date, and start time.
///
/// Serializes as a list of `{ key, exception }` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesExceptions {
    #[serde(with = "entry_list")]
    entries: BTreeMap<OccurrenceKey, Exception>,
}

impl SeriesExceptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Records a field change for the occurrence at `key`.
    ///
    /// An earlier modification is merged with `patch`, later fields winning.
    /// A cancelled occurrence is brought back with `patch` applied.
    pub fn modify(&mut self, key: OccurrenceKey, patch: EventPatch) {
        let patch = match self.entries.remove(&key) {
            Some(Exception::Modified { patch: earlier }) => (*earlier).merge(patch),
            Some(Exception::Cancelled) | None => patch,
        };
        self.entries.insert(
            key,
            Exception::Modified {
                patch: Box::new(patch),
            },
        );
    }

    /// Marks the occurrence at `key` as removed.
    pub fn cancel(&mut self, key: OccurrenceKey) {
        self.entries.insert(key, Exception::Cancelled);
    }

    /// Drops any exception for `key`, returning it.
    pub fn restore(&mut self, key: &OccurrenceKey) -> Option<Exception> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &OccurrenceKey) -> Option<&Exception> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OccurrenceKey, &Exception)> {
        self.entries.iter()
    }

    /// ## Summary
    /// Applies every exception to `occurrences`, returning a new sequence.
    ///
    /// Occurrences are looked up by series id, date, and start time as
    /// generated, so a patch that moves an occurrence does not change which
    /// key it is stored under. Occurrences without an exception pass through.
    #[must_use]
    pub fn apply(&self, occurrences: &[Event]) -> Vec<Event> {
        if self.entries.is_empty() {
            return occurrences.to_vec();
        }

        occurrences
            .iter()
            .filter_map(|event| match self.entries.get(&OccurrenceKey::of(event)) {
                Some(Exception::Cancelled) => None,
                Some(Exception::Modified { patch }) => Some(patch.apply(event)),
                None => Some(event.clone()),
            })
            .collect()
    }
}

mod entry_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Exception, OccurrenceKey};

    #[derive(Serialize)]
    struct EntryRef<'a> {
        key: &'a OccurrenceKey,
        exception: &'a Exception,
    }

    #[derive(Deserialize)]
    struct Entry {
        key: OccurrenceKey,
        exception: Exception,
    }

    pub(super) fn serialize<S: Serializer>(
        entries: &BTreeMap<OccurrenceKey, Exception>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            entries
                .iter()
                .map(|(key, exception)| EntryRef { key, exception }),
        )
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<OccurrenceKey, Exception>, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.key, entry.exception))
            .collect())
    }
}
