//! Integration tests for recurrence expansion and occurrence edits.

mod exceptions;
mod properties;
mod scenarios;
