//! # Transaction Executor
//!
//! `LeaseChain` owns every contract behind a single mutex and executes one
//! call at a time.
//!
//! ## Commit Flow
//!
//! ```text
//! submit(caller, call)
//!     │  lock contracts
//!     ↓
//! execute ──Err──→ journal dropped, stats.reverted += 1
//!     │ Ok
//!     ↓
//! publish journal → bus, metrics, stats.committed += 1
//!     │
//!     ↓
//! Receipt
//! ```
//!
//! Contracts stage events into the per-transaction `EventJournal` and undo
//! their own writes on failure, so a reverted call has no observable effect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lc_01_service_registry::ServiceRegistryApi;
use lc_02_selection_market::SelectionMarketApi;
use lc_03_breach_ledger::BreachLedgerApi;
use lease_telemetry::{log_tx_event, metric_inc, metrics};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared_bus::{EventFilter, EventPublisher, InMemoryEventBus, Subscription};
use shared_types::{EventJournal, MarketEvent, PartyId, PenaltyComputer};
use tracing::{debug, info, instrument, Span};
use uuid::Uuid;

use crate::chain::{Call, CallOutput, ChainView, Receipt, TxError};
use crate::container::{Contracts, RuntimeConfig};

/// Committed and reverted transaction counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStats {
    /// Transactions whose effects were applied.
    pub committed: u64,
    /// Transactions that failed with no effect.
    pub reverted: u64,
}

/// The in-process Lease-Chain.
pub struct LeaseChain {
    contracts: Mutex<Contracts>,
    bus: Arc<InMemoryEventBus>,
    config: RuntimeConfig,
    committed: AtomicU64,
    reverted: AtomicU64,
}

impl LeaseChain {
    /// Deploy all contracts according to `config`.
    #[instrument(name = "chain_init", skip(config), fields(deployer = %config.deployer))]
    pub fn new(config: RuntimeConfig) -> Self {
        info!("Deploying Lease-Chain contracts");
        let contracts = Contracts::deploy(&config);
        let bus = Arc::new(InMemoryEventBus::with_capacity(config.event_capacity));

        Self {
            contracts: Mutex::new(contracts),
            bus,
            config,
            committed: AtomicU64::new(0),
            reverted: AtomicU64::new(0),
        }
    }

    /// Configuration the chain was deployed with.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Execute `call` on behalf of `caller` as one atomic transaction.
    #[instrument(
        name = "tx",
        skip_all,
        fields(caller = %caller, operation = call.operation(), tx_id = tracing::field::Empty)
    )]
    pub fn submit(&self, caller: PartyId, call: Call) -> Result<Receipt, TxError> {
        let tx_id = Uuid::new_v4();
        Span::current().record("tx_id", tracing::field::display(tx_id));
        let operation = call.operation();

        let mut contracts = self.contracts.lock();
        let mut journal = EventJournal::new();

        match execute(&mut contracts, caller, call, &mut journal) {
            Ok(output) => {
                let events = journal.events().to_vec();
                let delivered = self.bus.publish_journal(journal);
                drop(contracts);

                record_committed(operation, &output, &events);
                self.committed.fetch_add(1, Ordering::Relaxed);
                log_tx_event!(
                    info,
                    "Transaction committed",
                    tx_id,
                    caller,
                    events = events.len(),
                    delivered
                );

                Ok(Receipt {
                    tx_id,
                    caller,
                    output,
                    events,
                })
            }
            Err(err) => {
                drop(contracts);
                metrics::record_transaction(operation, false);
                self.reverted.fetch_add(1, Ordering::Relaxed);
                log_tx_event!(
                    warn,
                    "Transaction reverted",
                    tx_id,
                    caller,
                    error = %err,
                    kind = err.kind()
                );
                Err(err)
            }
        }
    }

    /// Deploy another penalty engine bound to the ledger.
    ///
    /// The new engine is not used until the ledger is repointed at it.
    pub fn deploy_penalty_engine(&self, deployer: PartyId) -> Result<PartyId, TxError> {
        let mut contracts = self.contracts.lock();
        if contracts.is_contract(&deployer) {
            return Err(TxError::ContractCaller(deployer));
        }
        Ok(contracts.deploy_engine(deployer))
    }

    /// Lock the chain for reading.
    ///
    /// Holding the view blocks `submit`; drop it before submitting.
    pub fn view(&self) -> ChainView<'_> {
        ChainView::new(self.contracts.lock())
    }

    /// Subscribe to events committed from now on.
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        self.bus.subscribe(filter)
    }

    /// Every committed event, in commit order.
    pub fn event_history(&self) -> Vec<MarketEvent> {
        self.bus.history(&EventFilter::all())
    }

    /// Shared event bus.
    pub fn bus(&self) -> Arc<InMemoryEventBus> {
        Arc::clone(&self.bus)
    }

    /// Transaction counts so far.
    pub fn stats(&self) -> ChainStats {
        ChainStats {
            committed: self.committed.load(Ordering::Relaxed),
            reverted: self.reverted.load(Ordering::Relaxed),
        }
    }
}

/// Dispatch `call` to its contract.
fn execute(
    contracts: &mut Contracts,
    caller: PartyId,
    call: Call,
    journal: &mut EventJournal,
) -> Result<CallOutput, TxError> {
    if contracts.is_contract(&caller) {
        return Err(TxError::ContractCaller(caller));
    }

    match call {
        Call::RegistryAddService {
            service_id,
            location,
            cost,
        } => {
            let index = contracts
                .registry
                .add_service(caller, service_id, location, cost);
            Ok(CallOutput::ServiceIndex(index))
        }

        Call::MarketAddService {
            service_id,
            location,
            cost,
        } => {
            contracts
                .market
                .add_service(caller, service_id, location, cost, journal);
            Ok(CallOutput::Unit)
        }

        Call::SelectService {
            provider,
            service_id,
        } => {
            let selection = contracts
                .market
                .select_service(caller, provider, service_id, journal)?;
            Ok(CallOutput::Selection(selection))
        }

        Call::RegisterBreach { count } => {
            let outcome = contracts.ledger.register_breach(caller, count, journal)?;
            Ok(CallOutput::Breach(outcome))
        }

        Call::SetPenaltyEngine { engine } => {
            let target = contracts
                .engine(&engine)
                .cloned()
                .ok_or(TxError::UnknownContract(engine))?;
            contracts.ledger.set_penalty_engine(caller, target)?;
            Ok(CallOutput::Unit)
        }

        Call::CalculatePenalty { engine, party } => {
            let target = contracts
                .engine(&engine)
                .ok_or(TxError::UnknownContract(engine))?;
            debug!(engine = %engine, party = %party, "Direct penalty calculation");
            let penalty = target.calculate_penalty(caller, party, journal)?;
            Ok(CallOutput::Penalty(penalty))
        }
    }
}

/// Move the subsystem counters for a committed transaction.
fn record_committed(operation: &str, output: &CallOutput, events: &[MarketEvent]) {
    metrics::record_transaction(operation, true);

    if matches!(output, CallOutput::ServiceIndex(_)) {
        metric_inc!(metrics::REGISTRY_SERVICES_ADDED);
    }

    for event in events {
        match event {
            MarketEvent::ServiceAdded { .. } => metric_inc!(metrics::MARKET_SERVICES_ADDED),
            MarketEvent::ServiceSelected { .. } => metric_inc!(metrics::MARKET_SELECTIONS),
            MarketEvent::BreachRegistered { .. } => {
                metric_inc!(metrics::LEDGER_BREACHES_REGISTERED)
            }
            MarketEvent::PenaltyCalculated { .. } => {
                metric_inc!(metrics::ENGINE_PENALTIES_CALCULATED)
            }
        }
    }
}
