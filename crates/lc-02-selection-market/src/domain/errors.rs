//! # Domain Errors
//!
//! Error types for the Service Selection Market.

use super::value_objects::ServiceId;
use shared_types::PartyId;
use thiserror::Error;

/// Selection market error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// Provider never added a service.
    #[error("Provider not found: {0}")]
    ProviderNotFound(PartyId),

    /// Provider is known but has no such offering.
    #[error("Service not found: provider {provider} has no service {service_id}")]
    ServiceNotFound {
        /// Provider queried
        provider: PartyId,
        /// Requested service id
        service_id: ServiceId,
    },
}
