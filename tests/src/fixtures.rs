//! Shared fixtures for the test suite.

use lease_runtime::{Call, LeaseChain, Receipt, RuntimeConfig, TxError};
use shared_types::{PartyId, U256};

/// Provider identity used across scenarios.
pub const PROVIDER: PartyId = PartyId::new([0xA1; 20]);
/// Second provider identity.
pub const OTHER_PROVIDER: PartyId = PartyId::new([0xB2; 20]);
/// Consumer identity.
pub const CONSUMER: PartyId = PartyId::new([0xC3; 20]);

/// Chain deployed with the default configuration.
pub fn default_chain() -> LeaseChain {
    LeaseChain::new(RuntimeConfig::default())
}

/// Add an offering to the selection market.
pub fn market_add(chain: &LeaseChain, provider: PartyId, service_id: u64) -> Receipt {
    chain
        .submit(
            provider,
            Call::MarketAddService {
                service_id,
                location: format!("zone-{service_id}"),
                cost: U256::from(service_id * 10),
            },
        )
        .expect("market add never fails")
}

/// Register `count` breaches on behalf of `party`.
pub fn breach(chain: &LeaseChain, party: PartyId, count: u64) -> Result<Receipt, TxError> {
    chain.submit(
        party,
        Call::RegisterBreach {
            count: U256::from(count),
        },
    )
}
