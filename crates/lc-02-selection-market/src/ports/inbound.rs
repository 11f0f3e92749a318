//! # Inbound Ports
//!
//! API trait defining what the Service Selection Market can do.

use crate::domain::{MarketError, Selection, ServiceId, ServiceOffering};
use shared_types::{EventJournal, PartyId, U256};

/// Selection market API - inbound port.
pub trait SelectionMarketApi {
    /// Add or overwrite an offering in the caller's catalog.
    ///
    /// Registers the caller as a provider on first use. Stages `ServiceAdded`.
    fn add_service(
        &mut self,
        caller: PartyId,
        service_id: ServiceId,
        location: String,
        cost: U256,
        journal: &mut EventJournal,
    );

    /// Known providers in first-registration order.
    fn get_providers(&self) -> &[PartyId];

    /// All offerings of `provider`, in enumeration order.
    fn get_provider_services(&self, provider: &PartyId)
        -> Result<Vec<ServiceOffering>, MarketError>;

    /// Record `caller`'s selection of `provider`'s `service_id`.
    ///
    /// Stages `ServiceSelected` on success.
    fn select_service(
        &mut self,
        caller: PartyId,
        provider: PartyId,
        service_id: ServiceId,
        journal: &mut EventJournal,
    ) -> Result<Selection, MarketError>;

    /// Every selection ever made, in order.
    fn get_selections(&self) -> &[Selection];
}
