//! # Calls and Receipts
//!
//! The transaction surface of the runtime. Every call is executed on behalf of
//! a caller identity; the caller is the `msg.sender` seen by the contract.

use lc_01_service_registry::ServiceIndex;
use lc_02_selection_market::{Selection, ServiceId};
use lc_03_breach_ledger::BreachOutcome;
use serde::{Deserialize, Serialize};
use shared_types::{MarketEvent, PartyId, U256};
use uuid::Uuid;

/// A state-changing operation submitted to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum Call {
    /// Append a record to the service registry.
    RegistryAddService {
        /// Provider-chosen identifier
        service_id: String,
        /// Opaque location descriptor
        location: String,
        /// Cost of the service
        cost: U256,
    },

    /// Add or overwrite an offering in the selection market.
    MarketAddService {
        /// Numeric identifier within the caller's catalog
        service_id: ServiceId,
        /// Opaque location descriptor
        location: String,
        /// Cost of the service
        cost: U256,
    },

    /// Select a provider's offering.
    SelectService {
        /// Provider whose offering is selected
        provider: PartyId,
        /// Selected offering
        service_id: ServiceId,
    },

    /// Report breaches against the caller's own counter.
    RegisterBreach {
        /// Number of breaches to add
        count: U256,
    },

    /// Repoint the ledger at another deployed engine.
    SetPenaltyEngine {
        /// Address of the engine
        engine: PartyId,
    },

    /// Invoke an engine directly. Only the ledger is authorized, so this
    /// always fails for externally owned callers.
    CalculatePenalty {
        /// Address of the engine
        engine: PartyId,
        /// Party whose penalty is recomputed
        party: PartyId,
    },
}

impl Call {
    /// Operation name used as a metric label.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::RegistryAddService { .. } => "registry_add_service",
            Self::MarketAddService { .. } => "market_add_service",
            Self::SelectService { .. } => "select_service",
            Self::RegisterBreach { .. } => "register_breach",
            Self::SetPenaltyEngine { .. } => "set_penalty_engine",
            Self::CalculatePenalty { .. } => "calculate_penalty",
        }
    }
}

/// Return value of a committed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CallOutput {
    /// Index of the new registry record.
    ServiceIndex(ServiceIndex),
    /// The call has no return value.
    Unit,
    /// The recorded selection.
    Selection(Selection),
    /// Result of a breach registration.
    Breach(BreachOutcome),
    /// A computed penalty.
    Penalty(U256),
}

/// Proof that a call committed, with the events it emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Transaction identifier.
    pub tx_id: Uuid,
    /// Identity that submitted the call.
    pub caller: PartyId,
    /// Return value.
    pub output: CallOutput,
    /// Events in emission order.
    pub events: Vec<MarketEvent>,
}
