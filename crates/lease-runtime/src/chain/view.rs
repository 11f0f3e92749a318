//! # Read View
//!
//! Queries run against the same lock as transactions, so a view never
//! observes a half-applied call.

use lc_01_service_registry::{RegistryError, ServiceIndex, ServiceRegistryApi, ServiceRecord};
use lc_02_selection_market::{MarketError, Selection, SelectionMarketApi, ServiceOffering};
use lc_03_breach_ledger::{BreachLedgerApi, RepointPolicy};
use lc_04_penalty_engine::PenaltyEngineApi;
use parking_lot::MutexGuard;
use shared_types::{PartyId, U256};

use crate::chain::TxError;
use crate::container::Contracts;

/// Locked, read-only access to every contract.
pub struct ChainView<'a> {
    contracts: MutexGuard<'a, Contracts>,
}

impl<'a> ChainView<'a> {
    pub(crate) fn new(contracts: MutexGuard<'a, Contracts>) -> Self {
        Self { contracts }
    }

    // =========================================================================
    // Service Registry
    // =========================================================================

    /// Registry record at `index`.
    pub fn get_service(&self, index: ServiceIndex) -> Result<ServiceRecord, RegistryError> {
        self.contracts.registry.get_service(index).cloned()
    }

    /// Registry indices owned by `provider`.
    pub fn registry_provider_services(&self, provider: &PartyId) -> Vec<ServiceIndex> {
        self.contracts.registry.get_provider_services(provider).to_vec()
    }

    /// Number of registry records owned by `provider`.
    pub fn get_service_count(&self, provider: &PartyId) -> usize {
        self.contracts.registry.get_service_count(provider)
    }

    /// Number of registry records overall.
    pub fn total_services(&self) -> usize {
        self.contracts.registry.total_services()
    }

    // =========================================================================
    // Selection Market
    // =========================================================================

    /// Known market providers in registration order.
    pub fn get_providers(&self) -> Vec<PartyId> {
        self.contracts.market.get_providers().to_vec()
    }

    /// Market offerings of `provider`.
    pub fn market_provider_services(
        &self,
        provider: &PartyId,
    ) -> Result<Vec<ServiceOffering>, MarketError> {
        self.contracts.market.get_provider_services(provider)
    }

    /// Every recorded selection.
    pub fn get_selections(&self) -> Vec<Selection> {
        self.contracts.market.get_selections().to_vec()
    }

    // =========================================================================
    // Enforcement
    // =========================================================================

    /// Cumulative breach count of `party`.
    pub fn breach_count(&self, party: &PartyId) -> U256 {
        self.contracts.ledger.breach_count(party)
    }

    /// Stored penalty of `party` in the primary engine.
    pub fn penalty_of(&self, party: &PartyId) -> U256 {
        self.contracts
            .engine(&self.contracts.primary_engine)
            .map(|engine| engine.penalty_of(party))
            .unwrap_or_default()
    }

    /// Stored penalty of `party` in the engine at `engine`.
    pub fn penalty_in(&self, engine: &PartyId, party: &PartyId) -> Result<U256, TxError> {
        self.contracts
            .engine(engine)
            .map(|engine| engine.penalty_of(party))
            .ok_or(TxError::UnknownContract(*engine))
    }

    /// Engine the ledger currently triggers.
    pub fn penalty_engine_address(&self) -> PartyId {
        self.contracts.ledger.penalty_engine_address()
    }

    /// Active repoint policy.
    pub fn repoint_policy(&self) -> RepointPolicy {
        self.contracts.ledger.config().repoint_policy
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Service registry address.
    pub fn registry_address(&self) -> PartyId {
        self.contracts.registry.address()
    }

    /// Selection market address.
    pub fn market_address(&self) -> PartyId {
        self.contracts.market.address()
    }

    /// Breach ledger address.
    pub fn ledger_address(&self) -> PartyId {
        self.contracts.ledger.address()
    }

    /// Ledger owner (the deployer).
    pub fn ledger_owner(&self) -> PartyId {
        self.contracts.ledger.owner()
    }

    /// Engine deployed together with the ledger.
    pub fn primary_engine_address(&self) -> PartyId {
        self.contracts.primary_engine
    }

    /// Every deployed engine address.
    pub fn engine_addresses(&self) -> Vec<PartyId> {
        let mut addresses: Vec<_> = self.contracts.engines.keys().copied().collect();
        addresses.sort();
        addresses
    }
}
