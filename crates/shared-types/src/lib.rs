//! # Shared Types Crate
//!
//! This crate contains the identity type, notification events and the
//! capability contracts that connect the Lease-Chain subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Typed Capabilities**: The breach ledger and the penalty engine know
//!   each other only through `BreachSource` and `PenaltyComputer`.
//! - **Transactional Notifications**: Events are staged in an `EventJournal`
//!   and only become observable when the enclosing transaction commits.

pub mod contracts;
pub mod entities;
pub mod errors;
pub mod events;
pub mod journal;

pub use contracts::*;
pub use entities::*;
pub use errors::*;
pub use events::*;
pub use journal::*;
