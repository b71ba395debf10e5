//! Kairos core - calendar event model and date arithmetic.
//!
//! Holds the types shared by every crate in the workspace: the event record,
//! its repeat rule, the Gregorian helpers used by recurrence expansion, and
//! configuration loading.

pub mod calendar;
pub mod config;
pub mod error;
pub mod model;

pub use model::{Event, RepeatRule, RepeatType};
