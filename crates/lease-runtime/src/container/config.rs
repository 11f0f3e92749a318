//! # Runtime Configuration
//!
//! Deployment parameters and contract policies.
//!
//! ## Requirements
//!
//! - The deployer MUST NOT be the zero identity; it owns the breach ledger
//! - The event channel capacity MUST be non-zero

use lc_02_selection_market::{MarketConfig, ServiceIdPolicy};
use lc_03_breach_ledger::{LedgerConfig, RepointPolicy};
use lease_telemetry::TelemetryConfig;
use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use shared_types::{PartyId, PartyIdParseError};
use std::env;
use thiserror::Error;

/// Default deployer identity for local runs.
pub const DEFAULT_DEPLOYER: PartyId = PartyId::new([
    0xde, 0x91, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01,
]);

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Identity that deploys every contract and owns the ledger.
    pub deployer: PartyId,
    /// Selection market configuration.
    pub market: MarketConfig,
    /// Breach ledger configuration.
    pub ledger: LedgerConfig,
    /// Per-subscriber event buffer.
    pub event_capacity: usize,
    /// Logging and metrics configuration.
    pub telemetry: TelemetryConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            deployer: DEFAULT_DEPLOYER,
            market: MarketConfig::default(),
            ledger: LedgerConfig::default(),
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LC_DEPLOYER`: Hex party id of the deployer
    /// - `LC_REPOINT_POLICY`: `owner-only` (default) or `unrestricted`
    /// - `LC_SERVICE_ID_POLICY`: `explicit` (default) or `reserve-zero`
    /// - `LC_EVENT_CAPACITY`: Subscriber buffer size (default: 1000)
    ///
    /// Telemetry variables are read by `TelemetryConfig::from_env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self {
            telemetry: TelemetryConfig::from_env(),
            ..Self::default()
        };

        if let Ok(value) = env::var("LC_DEPLOYER") {
            config.deployer = PartyId::from_hex(value.trim())?;
        }

        if let Ok(value) = env::var("LC_REPOINT_POLICY") {
            config.ledger.repoint_policy =
                RepointPolicy::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                    var: "LC_REPOINT_POLICY",
                    value: value.clone(),
                })?;
        }

        if let Ok(value) = env::var("LC_SERVICE_ID_POLICY") {
            config.market.service_id_policy =
                ServiceIdPolicy::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                    var: "LC_SERVICE_ID_POLICY",
                    value: value.clone(),
                })?;
        }

        if let Ok(value) = env::var("LC_EVENT_CAPACITY") {
            config.event_capacity =
                value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var: "LC_EVENT_CAPACITY",
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    /// Validate configuration before deployment.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the deployer is the zero identity
    /// - the event capacity is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deployer.is_zero() {
            return Err(ConfigError::ZeroDeployer);
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::ZeroEventCapacity);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Deployer is the zero identity.
    #[error("deployer must not be the zero identity; set LC_DEPLOYER")]
    ZeroDeployer,

    /// Event channel capacity is zero.
    #[error("event capacity must be at least 1")]
    ZeroEventCapacity,

    /// Deployer could not be parsed.
    #[error("invalid LC_DEPLOYER: {0}")]
    InvalidDeployer(#[from] PartyIdParseError),

    /// An environment variable had an unusable value.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },
}
