//! Kairos - integration test support.
//!
//! Re-exports the workspace crates and holds the seed fixtures shared by the
//! suites under `tests/integration`.

pub use kairos_core;
pub use kairos_recur;

pub mod fixtures;
