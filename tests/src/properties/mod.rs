//! Property tests for invariants that must hold for every input.

pub mod penalty;
pub mod registry;
