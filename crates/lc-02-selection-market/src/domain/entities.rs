//! # Domain Entities
//!
//! Offerings, provider catalogs and selection records.

use super::value_objects::{ServiceId, ServiceIdPolicy};
use serde::{Deserialize, Serialize};
use shared_types::{PartyId, U256};
use std::collections::HashMap;

/// One offering in a provider's catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Identifier within the provider's catalog.
    pub service_id: ServiceId,
    /// Opaque location descriptor.
    pub location: String,
    /// Cost of the service.
    pub cost: U256,
}

/// A consumer's recorded choice of a provider's offering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Party that made the selection.
    pub consumer: PartyId,
    /// Provider whose offering was selected.
    pub provider: PartyId,
    /// Selected offering.
    pub service_id: ServiceId,
}

/// A provider's offerings plus their enumeration order.
#[derive(Clone, Debug, Default)]
pub struct ProviderCatalog {
    offerings: HashMap<ServiceId, ServiceOffering>,
    order: Vec<ServiceId>,
}

impl ProviderCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is present under `policy`.
    #[must_use]
    pub fn contains(&self, id: ServiceId, policy: ServiceIdPolicy) -> bool {
        policy.is_usable(id) && self.offerings.contains_key(&id)
    }

    /// Insert or overwrite an offering.
    ///
    /// The id is appended to the enumeration order only if it was not already
    /// present. Returns whether it was appended.
    pub fn upsert(&mut self, offering: ServiceOffering, policy: ServiceIdPolicy) -> bool {
        let id = offering.service_id;
        let appended = !self.contains(id, policy);
        self.offerings.insert(id, offering);
        if appended {
            self.order.push(id);
        }
        appended
    }

    /// Offerings in enumeration order.
    #[must_use]
    pub fn offerings(&self) -> Vec<ServiceOffering> {
        self.order
            .iter()
            .filter_map(|id| self.offerings.get(id))
            .cloned()
            .collect()
    }

    /// Enumeration order of service ids.
    #[must_use]
    pub fn order(&self) -> &[ServiceId] {
        &self.order
    }
}
