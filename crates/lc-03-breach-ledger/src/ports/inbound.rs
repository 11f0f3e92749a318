//! # Inbound Ports
//!
//! API trait defining what the Breach Ledger can do.

use crate::domain::{BreachOutcome, LedgerError};
use shared_types::{EventJournal, PartyId, PenaltyComputer, U256};
use std::sync::Arc;

/// Breach ledger API - inbound port.
pub trait BreachLedgerApi {
    /// Add `count` to the caller's own breach counter.
    ///
    /// Stages `BreachRegistered`, then triggers the penalty engine once the
    /// cumulative count reaches the threshold. Any failure leaves the counter
    /// and `journal` exactly as they were.
    fn register_breach(
        &mut self,
        caller: PartyId,
        count: U256,
        journal: &mut EventJournal,
    ) -> Result<BreachOutcome, LedgerError>;

    /// Replace the penalty engine, subject to the repoint policy.
    fn set_penalty_engine(
        &mut self,
        caller: PartyId,
        engine: Arc<dyn PenaltyComputer>,
    ) -> Result<(), LedgerError>;

    /// Current cumulative breach count of `party`.
    fn breach_count(&self, party: &PartyId) -> U256;

    /// Address of the engine currently triggered.
    fn penalty_engine_address(&self) -> PartyId;
}
