//! # Domain Entities
//!
//! The authoritative breach counters and the result of a registration.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::{BreachSource, PartyId, U256};
use std::collections::HashMap;

/// Per-party breach counters.
///
/// Shared as `Arc<BreachStore>` between the ledger, which writes, and penalty
/// engines, which only see it as a `BreachSource`. Writes are crate-private.
#[derive(Debug, Default)]
pub struct BreachStore {
    counts: RwLock<HashMap<PartyId, U256>>,
}

impl BreachStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parties with a recorded counter.
    #[must_use]
    pub fn party_count(&self) -> usize {
        self.counts.read().len()
    }

    /// Overwrite the counter of `party`.
    pub(crate) fn set(&self, party: PartyId, count: U256) {
        self.counts.write().insert(party, count);
    }

    /// Remove the counter of `party`, as if it was never written.
    pub(crate) fn clear(&self, party: &PartyId) {
        self.counts.write().remove(party);
    }

    /// Recorded counter, distinguishing "never written" from zero.
    pub(crate) fn get(&self, party: &PartyId) -> Option<U256> {
        self.counts.read().get(party).copied()
    }
}

impl BreachSource for BreachStore {
    fn breach_count(&self, party: &PartyId) -> U256 {
        self.get(party).unwrap_or_default()
    }
}

/// What a successful `register_breach` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachOutcome {
    /// Counter value after the increment.
    pub cumulative: U256,
    /// Penalty computed by the engine, if the threshold was reached.
    pub penalty: Option<U256>,
}

impl BreachOutcome {
    /// Whether a penalty calculation was triggered.
    #[must_use]
    pub fn triggered(&self) -> bool {
        self.penalty.is_some()
    }
}
