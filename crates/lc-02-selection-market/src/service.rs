//! # Selection Market
//!
//! Implementation of `SelectionMarketApi`.

use crate::domain::{
    MarketConfig, MarketError, ProviderCatalog, Selection, ServiceId, ServiceOffering,
};
use crate::ports::SelectionMarketApi;
use shared_types::{EventJournal, MarketEvent, PartyId, U256};
use std::collections::HashMap;
use tracing::{debug, info};

/// The service selection market contract.
#[derive(Debug)]
pub struct SelectionMarket {
    /// Deployed address.
    address: PartyId,
    /// Behavioural configuration.
    config: MarketConfig,
    /// Providers in first-registration order.
    providers: Vec<PartyId>,
    /// Provider -> catalog.
    catalogs: HashMap<PartyId, ProviderCatalog>,
    /// Global selection log.
    selections: Vec<Selection>,
}

impl SelectionMarket {
    /// Create an empty market deployed at `address`.
    #[must_use]
    pub fn new(address: PartyId, config: MarketConfig) -> Self {
        Self {
            address,
            config,
            providers: Vec::new(),
            catalogs: HashMap::new(),
            selections: Vec::new(),
        }
    }

    /// Deployed address.
    #[must_use]
    pub fn address(&self) -> PartyId {
        self.address
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> MarketConfig {
        self.config
    }

    fn catalog(&self, provider: &PartyId) -> Result<&ProviderCatalog, MarketError> {
        self.catalogs
            .get(provider)
            .ok_or(MarketError::ProviderNotFound(*provider))
    }
}

impl SelectionMarketApi for SelectionMarket {
    fn add_service(
        &mut self,
        caller: PartyId,
        service_id: ServiceId,
        location: String,
        cost: U256,
        journal: &mut EventJournal,
    ) {
        let policy = self.config.service_id_policy;
        let catalog = match self.catalogs.entry(caller) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                info!(provider = %caller, "[lc-02] New provider registered");
                self.providers.push(caller);
                entry.insert(ProviderCatalog::new())
            }
        };

        let appended = catalog.upsert(
            ServiceOffering {
                service_id,
                location: location.clone(),
                cost,
            },
            policy,
        );

        info!(
            provider = %caller,
            service_id,
            overwritten = !appended,
            "[lc-02] Service added"
        );

        journal.record(MarketEvent::ServiceAdded {
            provider: caller,
            service_id,
            location,
            cost,
        });
    }

    fn get_providers(&self) -> &[PartyId] {
        &self.providers
    }

    fn get_provider_services(
        &self,
        provider: &PartyId,
    ) -> Result<Vec<ServiceOffering>, MarketError> {
        Ok(self.catalog(provider)?.offerings())
    }

    fn select_service(
        &mut self,
        caller: PartyId,
        provider: PartyId,
        service_id: ServiceId,
        journal: &mut EventJournal,
    ) -> Result<Selection, MarketError> {
        let catalog = self.catalog(&provider).inspect_err(|_| {
            debug!(consumer = %caller, provider = %provider, "[lc-02] Selection of unknown provider");
        })?;

        if !catalog.contains(service_id, self.config.service_id_policy) {
            debug!(
                consumer = %caller,
                provider = %provider,
                service_id,
                "[lc-02] Selection of unknown service"
            );
            return Err(MarketError::ServiceNotFound {
                provider,
                service_id,
            });
        }

        let selection = Selection {
            consumer: caller,
            provider,
            service_id,
        };
        self.selections.push(selection.clone());

        info!(
            consumer = %caller,
            provider = %provider,
            service_id,
            "[lc-02] Service selected"
        );
        journal.record(MarketEvent::ServiceSelected {
            consumer: caller,
            provider,
            service_id,
        });

        Ok(selection)
    }

    fn get_selections(&self) -> &[Selection] {
        &self.selections
    }
}
