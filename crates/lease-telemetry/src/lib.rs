//! # Lease Telemetry
//!
//! Logging and metrics setup shared by every Lease-Chain binary.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with `EnvFilter`, human-readable or JSON
//! - **Metrics**: Prometheus counters in a process-wide registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lease_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!     // Logs and metrics are now being collected
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LC_SERVICE_NAME` | `lease-chain` | Service name in logs |
//! | `LC_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honored) |
//! | `LC_JSON_LOGS` | `false` | JSON log lines |
//! | `LC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `LC_NETWORK` | `devnet` | Network label |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};
pub use metrics::{
    gather_metrics, record_transaction, register_metrics, ENGINE_PENALTIES_CALCULATED,
    LEDGER_BREACHES_REGISTERED, MARKET_SELECTIONS, MARKET_SERVICES_ADDED,
    REGISTRY_SERVICES_ADDED, RUNTIME_TRANSACTIONS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Metric registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// A configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so that early transactions are counted
    register_metrics()?;
    logging::init_logging(&config)?;

    Ok(TelemetryGuard {
        service: config.full_service_name(),
    })
}

/// Guard that keeps telemetry active.
#[derive(Debug)]
pub struct TelemetryGuard {
    service: String,
}

impl TelemetryGuard {
    /// Name this process logs under.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service, "Shutting down telemetry...");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
