//! Prometheus metrics for Lease-Chain subsystems.
//!
//! All metrics follow the naming convention: `lc_<subsystem>_<metric>_total`.
//! Counters are incremented by the runtime for committed transactions only,
//! so a reverted call never moves a subsystem counter.

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // SERVICE REGISTRY (Subsystem 1)
    // =========================================================================

    /// Records appended to the service registry
    pub static ref REGISTRY_SERVICES_ADDED: Counter = Counter::new(
        "lc_registry_services_added_total",
        "Total service records appended to the registry"
    ).expect("metric creation failed");

    // =========================================================================
    // SELECTION MARKET (Subsystem 2)
    // =========================================================================

    /// Offerings added or overwritten in the market
    pub static ref MARKET_SERVICES_ADDED: Counter = Counter::new(
        "lc_market_services_added_total",
        "Total offerings added to the selection market"
    ).expect("metric creation failed");

    /// Consumer selections recorded
    pub static ref MARKET_SELECTIONS: Counter = Counter::new(
        "lc_market_selections_total",
        "Total service selections recorded"
    ).expect("metric creation failed");

    // =========================================================================
    // ENFORCEMENT (Subsystems 3, 4)
    // =========================================================================

    /// Breach registrations committed
    pub static ref LEDGER_BREACHES_REGISTERED: Counter = Counter::new(
        "lc_ledger_breaches_registered_total",
        "Total breach registrations committed"
    ).expect("metric creation failed");

    /// Penalties calculated and stored
    pub static ref ENGINE_PENALTIES_CALCULATED: Counter = Counter::new(
        "lc_engine_penalties_calculated_total",
        "Total penalties calculated"
    ).expect("metric creation failed");

    // =========================================================================
    // RUNTIME
    // =========================================================================

    /// Transactions by operation and outcome
    pub static ref RUNTIME_TRANSACTIONS: CounterVec = CounterVec::new(
        Opts::new("lc_runtime_transactions_total", "Transactions by operation and outcome"),
        &["operation", "outcome"]  // outcome: committed/reverted
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Calling this more than once is harmless.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(REGISTRY_SERVICES_ADDED.clone()),
        Box::new(MARKET_SERVICES_ADDED.clone()),
        Box::new(MARKET_SELECTIONS.clone()),
        Box::new(LEDGER_BREACHES_REGISTERED.clone()),
        Box::new(ENGINE_PENALTIES_CALCULATED.clone()),
        Box::new(RUNTIME_TRANSACTIONS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record one transaction outcome.
pub fn record_transaction(operation: &str, committed: bool) {
    let outcome = if committed { "committed" } else { "reverted" };
    RUNTIME_TRANSACTIONS
        .with_label_values(&[operation, outcome])
        .inc();
}
