//! # Domain Errors
//!
//! Error types for the Breach Ledger.

use shared_types::{PartyId, PenaltyError, U256};
use thiserror::Error;

/// Breach ledger error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The triggered penalty calculation failed; the registration was undone.
    #[error("Penalty calculation failed: {0}")]
    Penalty(#[from] PenaltyError),

    /// Adding the delta would overflow the counter.
    #[error("Breach counter overflow for {party}: {current} + {delta}")]
    CounterOverflow {
        /// Reporting party
        party: PartyId,
        /// Counter before the call
        current: U256,
        /// Requested increment
        delta: U256,
    },

    /// Repoint attempted by someone other than the owner.
    #[error("Not owner: {caller} cannot repoint, owner is {owner}")]
    NotOwner {
        /// Rejected caller
        caller: PartyId,
        /// Ledger owner
        owner: PartyId,
    },
}
