//! # Service Registry
//!
//! Arena-backed implementation of `ServiceRegistryApi`.

use crate::domain::{RegistryError, ServiceIndex, ServiceRecord};
use crate::ports::ServiceRegistryApi;
use shared_types::{PartyId, U256};
use std::collections::HashMap;
use tracing::{debug, info};

/// The service registry contract.
#[derive(Debug)]
pub struct ServiceRegistry {
    /// Deployed address.
    address: PartyId,
    /// Global arena. Push-only.
    records: Vec<ServiceRecord>,
    /// Provider -> arena positions, in insertion order.
    by_provider: HashMap<PartyId, Vec<ServiceIndex>>,
}

impl ServiceRegistry {
    /// Create an empty registry deployed at `address`.
    #[must_use]
    pub fn new(address: PartyId) -> Self {
        Self {
            address,
            records: Vec::new(),
            by_provider: HashMap::new(),
        }
    }

    /// Deployed address.
    #[must_use]
    pub fn address(&self) -> PartyId {
        self.address
    }

    /// All records in index order.
    #[must_use]
    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }
}

impl ServiceRegistryApi for ServiceRegistry {
    fn add_service(
        &mut self,
        caller: PartyId,
        service_id: String,
        location: String,
        cost: U256,
    ) -> ServiceIndex {
        let index = self.records.len();
        info!(
            provider = %caller,
            index,
            service_id = %service_id,
            "[lc-01] Service registered"
        );

        self.records
            .push(ServiceRecord::new(caller, service_id, location, cost));
        self.by_provider.entry(caller).or_default().push(index);
        index
    }

    fn get_service(&self, index: ServiceIndex) -> Result<&ServiceRecord, RegistryError> {
        self.records.get(index).ok_or_else(|| {
            debug!(index, count = self.records.len(), "[lc-01] Service lookup out of range");
            RegistryError::IndexOutOfRange {
                index,
                count: self.records.len(),
            }
        })
    }

    fn get_provider_services(&self, provider: &PartyId) -> &[ServiceIndex] {
        self.by_provider
            .get(provider)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn total_services(&self) -> usize {
        self.records.len()
    }
}
