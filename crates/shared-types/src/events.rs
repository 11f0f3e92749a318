//! # Notification Events
//!
//! Every observable state transition emits one of these. They are staged in
//! an `EventJournal` and published to the shared bus only on commit.

use crate::entities::{PartyId, U256};
use serde::{Deserialize, Serialize};

/// Routing topic for events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Catalog and selection activity.
    Market,
    /// Breach and penalty activity.
    Enforcement,
}

/// All notifications emitted by the Lease-Chain subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A provider added or overwrote an offering in the selection market.
    ServiceAdded {
        provider: PartyId,
        service_id: u64,
        location: String,
        cost: U256,
    },

    /// A consumer selected a provider's offering.
    ServiceSelected {
        consumer: PartyId,
        provider: PartyId,
        service_id: u64,
    },

    /// A party self-reported breaches.
    BreachRegistered {
        party: PartyId,
        /// Counter value after this registration.
        cumulative_count: U256,
    },

    /// A penalty was (re)calculated and stored.
    PenaltyCalculated { party: PartyId, penalty: U256 },
}

impl MarketEvent {
    /// Topic this event routes to.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ServiceAdded { .. } | Self::ServiceSelected { .. } => EventTopic::Market,
            Self::BreachRegistered { .. } | Self::PenaltyCalculated { .. } => {
                EventTopic::Enforcement
            }
        }
    }

    /// Event name, as used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ServiceAdded { .. } => "ServiceAdded",
            Self::ServiceSelected { .. } => "ServiceSelected",
            Self::BreachRegistered { .. } => "BreachRegistered",
            Self::PenaltyCalculated { .. } => "PenaltyCalculated",
        }
    }
}
