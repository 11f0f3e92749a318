//! # Inbound Ports
//!
//! API trait defining what the Service Registry can do.

use crate::domain::{RegistryError, ServiceIndex, ServiceRecord};
use shared_types::{PartyId, U256};

/// Service registry API - inbound port.
pub trait ServiceRegistryApi {
    /// Append a service attributed to `caller`.
    ///
    /// Never fails; duplicates are allowed.
    fn add_service(
        &mut self,
        caller: PartyId,
        service_id: String,
        location: String,
        cost: U256,
    ) -> ServiceIndex;

    /// Record at `index`.
    fn get_service(&self, index: ServiceIndex) -> Result<&ServiceRecord, RegistryError>;

    /// Global indices owned by `provider`, in insertion order.
    fn get_provider_services(&self, provider: &PartyId) -> &[ServiceIndex];

    /// Number of services owned by `provider`.
    fn get_service_count(&self, provider: &PartyId) -> usize {
        self.get_provider_services(provider).len()
    }

    /// Number of services across all providers.
    fn total_services(&self) -> usize;
}
