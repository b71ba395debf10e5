//! Recurrence expansion for seed events.
//!
//! Turns a seed event and its repeat rule into the ordered occurrences it
//! stands for, using fixed anchors and immutable cursor steps.

mod cursor;
mod generator;
mod options;

pub use generator::{expand_events, generate, generate_with_options};
pub use options::ExpansionOptions;
