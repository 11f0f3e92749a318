//! # Deployed Contracts
//!
//! Holds every contract instance and assigns deployment addresses.
//!
//! ## Deployment Order
//!
//! ```text
//! nonce 0: ServiceRegistry
//! nonce 1: SelectionMarket
//! nonce 2: BreachLedger   ──┐ owns the BreachStore
//! nonce 3: PenaltyEngine  ←─┘ bound to the ledger address
//! ```
//!
//! The ledger and its first engine reference each other, so both addresses
//! are derived before either is constructed. Additional engines deployed
//! later take the deployer's next nonce and bind to the same ledger.

use std::collections::HashMap;
use std::sync::Arc;

use lc_01_service_registry::ServiceRegistry;
use lc_02_selection_market::SelectionMarket;
use lc_03_breach_ledger::{BreachLedger, BreachStore};
use lc_04_penalty_engine::PenaltyEngine;
use shared_types::{derive_contract_address, PartyId};
use tracing::info;

use crate::container::config::RuntimeConfig;

/// Every deployed contract plus deployer nonces.
#[derive(Debug)]
pub struct Contracts {
    /// Service Registry (Subsystem 1)
    pub registry: ServiceRegistry,
    /// Selection Market (Subsystem 2)
    pub market: SelectionMarket,
    /// Breach Ledger (Subsystem 3)
    pub ledger: BreachLedger,
    /// Breach counters shared between the ledger and its engines.
    pub store: Arc<BreachStore>,
    /// Penalty engines (Subsystem 4) by address.
    pub engines: HashMap<PartyId, Arc<PenaltyEngine>>,
    /// Address of the engine deployed together with the ledger.
    pub primary_engine: PartyId,
    nonces: HashMap<PartyId, u64>,
}

impl Contracts {
    /// Deploy the four contracts from `config.deployer`.
    pub fn deploy(config: &RuntimeConfig) -> Self {
        let deployer = config.deployer;
        let mut nonces = HashMap::new();
        let mut next = |party: PartyId| {
            let nonce = nonces.entry(party).or_insert(0u64);
            let address = derive_contract_address(&party, *nonce);
            *nonce += 1;
            address
        };

        let registry_address = next(deployer);
        let market_address = next(deployer);
        let ledger_address = next(deployer);
        let engine_address = next(deployer);

        let store = Arc::new(BreachStore::new());
        let engine = Arc::new(PenaltyEngine::new(
            engine_address,
            ledger_address,
            store.clone(),
        ));
        let ledger = BreachLedger::new(
            ledger_address,
            deployer,
            config.ledger,
            Arc::clone(&store),
            engine.clone(),
        );

        info!(deployer = %deployer, address = %registry_address, "  [01] Service Registry deployed");
        info!(deployer = %deployer, address = %market_address, "  [02] Selection Market deployed");
        info!(deployer = %deployer, address = %ledger_address, "  [03] Breach Ledger deployed");
        info!(deployer = %deployer, address = %engine_address, "  [04] Penalty Engine deployed");

        let mut engines = HashMap::new();
        engines.insert(engine_address, engine);

        Self {
            registry: ServiceRegistry::new(registry_address),
            market: SelectionMarket::new(market_address, config.market),
            ledger,
            store,
            engines,
            primary_engine: engine_address,
            nonces,
        }
    }

    /// Deploy another penalty engine bound to the ledger.
    pub fn deploy_engine(&mut self, deployer: PartyId) -> PartyId {
        let nonce = self.nonces.entry(deployer).or_insert(0);
        let address = derive_contract_address(&deployer, *nonce);
        *nonce += 1;

        let engine = Arc::new(PenaltyEngine::new(
            address,
            self.ledger.address(),
            self.store.clone(),
        ));
        self.engines.insert(address, engine);

        info!(deployer = %deployer, address = %address, "  [04] Additional Penalty Engine deployed");
        address
    }

    /// Engine deployed at `address`, if any.
    pub fn engine(&self, address: &PartyId) -> Option<&Arc<PenaltyEngine>> {
        self.engines.get(address)
    }

    /// Whether `party` is the address of a deployed contract.
    pub fn is_contract(&self, party: &PartyId) -> bool {
        *party == self.registry.address()
            || *party == self.market.address()
            || *party == self.ledger.address()
            || self.engines.contains_key(party)
    }
}
