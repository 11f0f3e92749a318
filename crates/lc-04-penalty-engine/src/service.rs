//! # Penalty Engine
//!
//! Implementation of `PenaltyComputer` and `PenaltyEngineApi`.

use crate::algorithms::compute_penalty;
use crate::ports::PenaltyEngineApi;
use parking_lot::RwLock;
use shared_types::{
    BreachSource, EventJournal, MarketEvent, PartyId, PenaltyComputer, PenaltyError, U256,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// The penalty engine contract.
///
/// Bound at construction to one ledger address and one breach source; the
/// binding cannot be changed afterwards.
pub struct PenaltyEngine {
    address: PartyId,
    ledger: PartyId,
    breaches: Arc<dyn BreachSource>,
    penalties: RwLock<HashMap<PartyId, U256>>,
}

impl PenaltyEngine {
    /// Create an engine at `address`, accepting calls only from `ledger`.
    #[must_use]
    pub fn new(address: PartyId, ledger: PartyId, breaches: Arc<dyn BreachSource>) -> Self {
        Self {
            address,
            ledger,
            breaches,
            penalties: RwLock::new(HashMap::new()),
        }
    }

    /// Number of parties with a stored penalty.
    #[must_use]
    pub fn penalized_parties(&self) -> usize {
        self.penalties.read().len()
    }
}

impl fmt::Debug for PenaltyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PenaltyEngine")
            .field("address", &self.address)
            .field("ledger", &self.ledger)
            .field("penalized_parties", &self.penalized_parties())
            .finish()
    }
}

impl PenaltyComputer for PenaltyEngine {
    fn address(&self) -> PartyId {
        self.address
    }

    fn calculate_penalty(
        &self,
        caller: PartyId,
        party: PartyId,
        journal: &mut EventJournal,
    ) -> Result<U256, PenaltyError> {
        if caller != self.ledger {
            warn!(
                caller = %caller,
                ledger = %self.ledger,
                "[lc-04] Unauthorized penalty calculation"
            );
            return Err(PenaltyError::UnauthorizedCaller {
                caller,
                expected: self.ledger,
            });
        }

        let count = self.breaches.breach_count(&party);
        let penalty = compute_penalty(count).inspect_err(|err| {
            warn!(party = %party, %count, error = %err, "[lc-04] Penalty formula rejected count");
        })?;

        self.penalties.write().insert(party, penalty);
        info!(
            engine = %self.address,
            party = %party,
            breach_count = %count,
            %penalty,
            "[lc-04] Penalty calculated"
        );
        journal.record(MarketEvent::PenaltyCalculated { party, penalty });

        Ok(penalty)
    }
}

impl PenaltyEngineApi for PenaltyEngine {
    fn penalty_of(&self, party: &PartyId) -> U256 {
        self.penalties.read().get(party).copied().unwrap_or_default()
    }

    fn ledger(&self) -> PartyId {
        self.ledger
    }
}
