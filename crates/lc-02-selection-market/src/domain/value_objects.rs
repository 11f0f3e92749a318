//! # Domain Value Objects
//!
//! Identifiers and configuration for the selection market.

use serde::{Deserialize, Serialize};

/// Numeric service identifier, unique within one provider's catalog.
pub type ServiceId = u64;

/// How service id presence is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceIdPolicy {
    /// Presence is map membership; every id, including `0`, is usable.
    #[default]
    Explicit,
    /// Id `0` means "absent": it can be stored but is never found.
    ReserveZero,
}

impl ServiceIdPolicy {
    /// Whether `id` can ever be reported as present.
    #[must_use]
    pub fn is_usable(&self, id: ServiceId) -> bool {
        match self {
            Self::Explicit => true,
            Self::ReserveZero => id != 0,
        }
    }

    /// Parse from a config string (`explicit` or `reserve-zero`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "explicit" => Some(Self::Explicit),
            "reserve-zero" | "reserve_zero" | "legacy" => Some(Self::ReserveZero),
            _ => None,
        }
    }
}

/// Selection market configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketConfig {
    /// Service id presence policy.
    pub service_id_policy: ServiceIdPolicy,
}

impl MarketConfig {
    /// Configuration matching catalogs that reserve id `0`.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            service_id_policy: ServiceIdPolicy::ReserveZero,
        }
    }
}
