//! # Inbound Ports
//!
//! Query API of the Penalty Engine. Computation itself is exposed through
//! the shared `PenaltyComputer` contract.

use shared_types::{PartyId, PenaltyComputer, U256};

/// Penalty engine API - inbound port.
pub trait PenaltyEngineApi: PenaltyComputer {
    /// Most recently stored penalty for `party`, zero if never calculated.
    fn penalty_of(&self, party: &PartyId) -> U256;

    /// The ledger address this engine accepts calls from.
    fn ledger(&self) -> PartyId;
}
