//! # Cross-Contract Capabilities
//!
//! The breach ledger and the penalty engine reference each other only through
//! these traits, injected at construction.
//!
//! ```text
//! ┌──────────────┐  PenaltyComputer   ┌───────────────┐
//! │ BreachLedger │ ─────────────────→ │ PenaltyEngine │
//! └──────────────┘                    └───────────────┘
//!        │ writes                             │ reads
//!        ↓                                    ↓
//!   ┌─────────────────── BreachStore (BreachSource) ──┐
//!   └─────────────────────────────────────────────────┘
//! ```
//!
//! The engine never holds a handle to the ledger itself, only the read-only
//! `BreachSource`, so it cannot re-enter `register_breach`.

use crate::entities::{PartyId, U256};
use crate::errors::PenaltyError;
use crate::journal::EventJournal;

/// Read-only access to authoritative breach counters.
pub trait BreachSource: Send + Sync {
    /// Current cumulative breach count of `party` (zero if never reported).
    fn breach_count(&self, party: &PartyId) -> U256;
}

/// Something that computes and stores penalties on request of a ledger.
pub trait PenaltyComputer: Send + Sync {
    /// Address of this computer instance.
    fn address(&self) -> PartyId;

    /// Recalculate the penalty for `party`.
    ///
    /// `caller` is the identity invoking the computation; implementations
    /// must reject every caller other than the ledger they are bound to.
    /// On success the resulting event is staged in `journal`.
    fn calculate_penalty(
        &self,
        caller: PartyId,
        party: PartyId,
        journal: &mut EventJournal,
    ) -> Result<U256, PenaltyError>;
}
