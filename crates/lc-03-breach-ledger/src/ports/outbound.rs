//! # Outbound Ports
//!
//! The ledger's only external dependency is the penalty computer it triggers.
//! The contract lives in `shared-types` so that engines can implement it
//! without depending on this crate.

pub use shared_types::{BreachSource, PenaltyComputer};
