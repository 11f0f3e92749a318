//! # Breach Ledger
//!
//! Implementation of `BreachLedgerApi`.

use crate::domain::{
    crosses_threshold, BreachOutcome, BreachStore, LedgerConfig, LedgerError, RepointPolicy,
};
use crate::ports::BreachLedgerApi;
use shared_types::{BreachSource, EventJournal, MarketEvent, PartyId, PenaltyComputer, U256};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The breach ledger contract.
pub struct BreachLedger {
    address: PartyId,
    owner: PartyId,
    config: LedgerConfig,
    store: Arc<BreachStore>,
    engine: Arc<dyn PenaltyComputer>,
}

impl BreachLedger {
    /// Create a ledger at `address`, writing into `store` and triggering `engine`.
    #[must_use]
    pub fn new(
        address: PartyId,
        owner: PartyId,
        config: LedgerConfig,
        store: Arc<BreachStore>,
        engine: Arc<dyn PenaltyComputer>,
    ) -> Self {
        Self {
            address,
            owner,
            config,
            store,
            engine,
        }
    }

    /// Deployed address; the identity presented to the penalty engine.
    #[must_use]
    pub fn address(&self) -> PartyId {
        self.address
    }

    /// Owner allowed to repoint under `RepointPolicy::OwnerOnly`.
    #[must_use]
    pub fn owner(&self) -> PartyId {
        self.owner
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> LedgerConfig {
        self.config
    }

    /// Shared counter store.
    #[must_use]
    pub fn store(&self) -> &Arc<BreachStore> {
        &self.store
    }

    fn restore(&self, party: PartyId, previous: Option<U256>) {
        match previous {
            Some(count) => self.store.set(party, count),
            None => self.store.clear(&party),
        }
    }
}

impl fmt::Debug for BreachLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreachLedger")
            .field("address", &self.address)
            .field("owner", &self.owner)
            .field("config", &self.config)
            .field("engine", &self.engine.address())
            .finish()
    }
}

impl BreachLedgerApi for BreachLedger {
    fn register_breach(
        &mut self,
        caller: PartyId,
        count: U256,
        journal: &mut EventJournal,
    ) -> Result<BreachOutcome, LedgerError> {
        let previous = self.store.get(&caller);
        let current = previous.unwrap_or_default();
        let cumulative = current
            .checked_add(count)
            .ok_or(LedgerError::CounterOverflow {
                party: caller,
                current,
                delta: count,
            })?;

        let checkpoint = journal.checkpoint();
        self.store.set(caller, cumulative);
        journal.record(MarketEvent::BreachRegistered {
            party: caller,
            cumulative_count: cumulative,
        });

        if !crosses_threshold(cumulative) {
            info!(party = %caller, %cumulative, "[lc-03] Breach registered");
            return Ok(BreachOutcome {
                cumulative,
                penalty: None,
            });
        }

        debug!(
            party = %caller,
            %cumulative,
            engine = %self.engine.address(),
            "[lc-03] Threshold reached, triggering penalty engine"
        );

        match self.engine.calculate_penalty(self.address, caller, journal) {
            Ok(penalty) => {
                info!(
                    party = %caller,
                    %cumulative,
                    %penalty,
                    "[lc-03] Breach registered with penalty"
                );
                Ok(BreachOutcome {
                    cumulative,
                    penalty: Some(penalty),
                })
            }
            Err(err) => {
                self.restore(caller, previous);
                journal.revert_to(checkpoint);
                warn!(party = %caller, error = %err, "[lc-03] Penalty failed, breach reverted");
                Err(err.into())
            }
        }
    }

    fn set_penalty_engine(
        &mut self,
        caller: PartyId,
        engine: Arc<dyn PenaltyComputer>,
    ) -> Result<(), LedgerError> {
        if self.config.repoint_policy == RepointPolicy::OwnerOnly && caller != self.owner {
            warn!(caller = %caller, owner = %self.owner, "[lc-03] Repoint rejected");
            return Err(LedgerError::NotOwner {
                caller,
                owner: self.owner,
            });
        }

        info!(
            caller = %caller,
            from = %self.engine.address(),
            to = %engine.address(),
            "[lc-03] Penalty engine repointed"
        );
        self.engine = engine;
        Ok(())
    }

    fn breach_count(&self, party: &PartyId) -> U256 {
        self.store.breach_count(party)
    }

    fn penalty_engine_address(&self) -> PartyId {
        self.engine.address()
    }
}
