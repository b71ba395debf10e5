//! Single-occurrence edits on expanded series.
//!
//! Occurrences of one series share the seed's identifier, so an occurrence is
//! addressed by its [`OccurrenceKey`]. Edits never touch the repeat rule and
//! always return a new sequence.

mod edit;
mod exceptions;
mod key;
mod patch;

pub use edit::{delete_recurring_occurrence, update_recurring_occurrence};
pub use exceptions::{Exception, SeriesExceptions};
pub use key::OccurrenceKey;
pub use patch::EventPatch;
