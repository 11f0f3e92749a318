//! # LC-03 Breach Ledger
//!
//! Per-party cumulative breach counters with a penalty trigger.
//!
//! **Subsystem ID:** 3
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A party reports its own breaches with an arbitrary delta. When the
//! cumulative count reaches [`BREACH_THRESHOLD`] the ledger synchronously asks
//! its penalty engine to recompute that party's penalty, presenting its own
//! address as the caller.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Counters never decrease | `service.rs` - checked add only |
//! | A party only increments its own counter | `service.rs` - counter keyed by caller |
//! | Failed trigger leaves no trace | `service.rs` - counter restore + journal rollback |
//! | Re-trigger on every call at or above threshold | `domain/value_objects.rs` - `crosses_threshold()` |
//!
//! ## Reentrancy
//!
//! `register_breach` holds `&mut self` for its whole duration, and the engine
//! only sees the counters through the read-only `BreachSource` view of the
//! shared [`BreachStore`]. A nested registration cannot be expressed.
//!
//! ## Repointing
//!
//! | Policy | Who may call `set_penalty_engine` |
//! |--------|-----------------------------------|
//! | `OwnerOnly` (default) | the ledger owner |
//! | `Unrestricted` | anyone |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    crosses_threshold, BreachOutcome, BreachStore, LedgerConfig, LedgerError, RepointPolicy,
    BREACH_THRESHOLD,
};
pub use ports::{BreachLedgerApi, BreachSource, PenaltyComputer};
pub use service::BreachLedger;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 3;
