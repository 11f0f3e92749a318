//! # Domain Value Objects
//!
//! Threshold constant and ledger configuration.

use serde::{Deserialize, Serialize};
use shared_types::U256;

/// Cumulative breach count at which a penalty calculation is triggered.
pub const BREACH_THRESHOLD: u64 = 10;

/// Whether `cumulative` is at or above the trigger threshold.
#[must_use]
pub fn crosses_threshold(cumulative: U256) -> bool {
    cumulative >= U256::from(BREACH_THRESHOLD)
}

/// Who may repoint the ledger at another penalty engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepointPolicy {
    /// Only the ledger owner.
    #[default]
    OwnerOnly,
    /// Any caller.
    Unrestricted,
}

impl RepointPolicy {
    /// Parse from a config string (`owner-only` or `unrestricted`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owner-only" | "owner_only" | "owner" => Some(Self::OwnerOnly),
            "unrestricted" | "open" => Some(Self::Unrestricted),
            _ => None,
        }
    }
}

/// Breach ledger configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Repoint authorization policy.
    pub repoint_policy: RepointPolicy,
}
