//! # LC-04 Penalty Engine
//!
//! Computes and stores per-party penalties on request of the breach ledger.
//!
//! **Subsystem ID:** 4
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Authorization
//!
//! Each engine is bound to exactly one ledger address at construction. Any
//! other caller is rejected with `PenaltyError::UnauthorizedCaller` before
//! state is read.
//!
//! ## Formula
//!
//! ```text
//! penalty = count * (count + 1) * (100 - count) / 100
//! ```
//!
//! | Breach count | Result |
//! |--------------|--------|
//! | `0..=100` | value above, truncated |
//! | `101..10^18` | `ArithmeticUnderflow` |
//! | `>= 10^18` | `OverflowGuard` |
//!
//! The count is always re-read from the bound `BreachSource`; the ledger
//! never passes it in.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::compute_penalty;
pub use domain::{FORMULA_DOMAIN_MAX, OVERFLOW_CEILING, PENALTY_DIVISOR};
pub use ports::PenaltyEngineApi;
pub use service::PenaltyEngine;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 4;
