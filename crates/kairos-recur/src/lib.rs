//! Kairos recurrence - expansion and editing of repeating calendar events.
//!
//! A seed [`Event`](kairos_core::Event) carrying a repeat rule expands into the
//! ordered occurrences it represents. Single occurrences can then be edited or
//! removed without touching the rule, either directly on a generated sequence
//! or through a persisted exception list.

pub mod error;
pub mod expand;
pub mod indicator;
pub mod occurrence;

pub use error::{ExpansionError, ExpansionResult};
pub use expand::{ExpansionOptions, expand_events, generate, generate_with_options};
pub use indicator::has_recurring_icon;
pub use occurrence::{
    EventPatch, Exception, OccurrenceKey, SeriesExceptions, delete_recurring_occurrence,
    update_recurring_occurrence,
};
