//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full directive
    pub log_level: String,

    /// Whether to write log output to the console
    pub console_output: bool,

    /// Whether to format logs as JSON
    pub json_logs: bool,

    /// Network identifier (devnet, testnet, ...)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "lease-chain".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            network: "devnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LC_SERVICE_NAME`: Service name (default: lease-chain)
    /// - `LC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `LC_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `LC_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `LC_NETWORK`: Network name (default: devnet)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("LC_SERVICE_NAME")
                .unwrap_or_else(|_| "lease-chain".to_string()),

            log_level: env::var("LC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("LC_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v).unwrap_or(true))
                .unwrap_or(true),

            json_logs: env::var("LC_JSON_LOGS")
                .map(|v| parse_flag(&v).unwrap_or(false))
                .unwrap_or(is_container),

            network: env::var("LC_NETWORK").unwrap_or_else(|_| "devnet".to_string()),
        }
    }

    /// Service name qualified with the network, e.g. `lease-chain-devnet`.
    pub fn full_service_name(&self) -> String {
        format!("{}-{}", self.service_name, self.network)
    }
}

/// Parse a boolean environment flag.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
