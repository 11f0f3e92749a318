//! # Domain Entities
//!
//! Service records held by the registry.

use serde::{Deserialize, Serialize};
use shared_types::{PartyId, U256};

/// Position of a record in the global arena.
pub type ServiceIndex = usize;

/// A leasable service offered by a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Party that registered the service.
    pub provider: PartyId,
    /// Opaque service identifier chosen by the provider.
    pub service_id: String,
    /// Opaque location descriptor.
    pub location: String,
    /// Cost of the service.
    pub cost: U256,
}

impl ServiceRecord {
    /// Create a new record.
    pub fn new(
        provider: PartyId,
        service_id: impl Into<String>,
        location: impl Into<String>,
        cost: U256,
    ) -> Self {
        Self {
            provider,
            service_id: service_id.into(),
            location: location.into(),
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = ServiceRecord::new(PartyId::from_low_u64(1), "gpu-a100", "us-east", U256::from(40));
        assert_eq!(record.service_id, "gpu-a100");
        assert_eq!(record.location, "us-east");
        assert_eq!(record.cost, U256::from(40));
    }

    #[test]
    fn test_record_serializes() {
        let record = ServiceRecord::new(PartyId::from_low_u64(1), "s", "l", U256::zero());
        let json = serde_json::to_string(&record).unwrap();
        let back: ServiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
