//! # Marketplace Flows
//!
//! Service registry and selection market driven through `LeaseChain`.

#[cfg(test)]
mod tests {
    use crate::fixtures::{default_chain, market_add, CONSUMER, OTHER_PROVIDER, PROVIDER};
    use lc_01_service_registry::RegistryError;
    use lc_02_selection_market::{MarketConfig, MarketError, Selection, ServiceIdPolicy};
    use lease_runtime::{Call, CallOutput, LeaseChain, RuntimeConfig, TxError};
    use shared_types::U256;

    fn registry_add(chain: &LeaseChain, caller: shared_types::PartyId, id: &str) -> usize {
        let receipt = chain
            .submit(
                caller,
                Call::RegistryAddService {
                    service_id: id.to_string(),
                    location: "eu-west".to_string(),
                    cost: U256::from(3),
                },
            )
            .unwrap();
        match receipt.output {
            CallOutput::ServiceIndex(index) => index,
            other => panic!("unexpected output {other:?}"),
        }
    }

    // =========================================================================
    // SERVICE REGISTRY
    // =========================================================================

    #[test]
    fn test_registry_indices_follow_call_order() {
        let chain = default_chain();
        let indices = [
            registry_add(&chain, PROVIDER, "a"),
            registry_add(&chain, OTHER_PROVIDER, "b"),
            registry_add(&chain, PROVIDER, "a"),
        ];
        assert_eq!(indices, [0, 1, 2]);

        let view = chain.view();
        assert_eq!(view.get_service(0).unwrap().provider, PROVIDER);
        assert_eq!(view.get_service(1).unwrap().provider, OTHER_PROVIDER);
        // Duplicate ids are stored as separate records.
        assert_eq!(view.get_service(2).unwrap().service_id, "a");
        assert_eq!(view.registry_provider_services(&PROVIDER), vec![0, 2]);
        assert_eq!(view.get_service_count(&PROVIDER), 2);
        assert_eq!(view.get_service_count(&CONSUMER), 0);
    }

    #[test]
    fn test_registry_lookup_past_end_fails() {
        let chain = default_chain();
        registry_add(&chain, PROVIDER, "a");

        assert_eq!(
            chain.view().get_service(1),
            Err(RegistryError::IndexOutOfRange { index: 1, count: 1 })
        );
    }

    // =========================================================================
    // SELECTION MARKET
    // =========================================================================

    #[test]
    fn test_select_requires_registered_provider() {
        let chain = default_chain();
        let select = Call::SelectService {
            provider: PROVIDER,
            service_id: 1,
        };

        assert_eq!(
            chain.submit(CONSUMER, select.clone()),
            Err(TxError::Market(MarketError::ProviderNotFound(PROVIDER)))
        );

        market_add(&chain, PROVIDER, 1);
        let receipt = chain.submit(CONSUMER, select).unwrap();

        let expected = Selection {
            consumer: CONSUMER,
            provider: PROVIDER,
            service_id: 1,
        };
        assert_eq!(receipt.output, CallOutput::Selection(expected.clone()));
        assert_eq!(chain.view().get_selections(), vec![expected]);
    }

    #[test]
    fn test_select_unknown_service_of_known_provider() {
        let chain = default_chain();
        market_add(&chain, PROVIDER, 1);

        assert_eq!(
            chain.submit(
                CONSUMER,
                Call::SelectService {
                    provider: PROVIDER,
                    service_id: 2
                }
            ),
            Err(TxError::Market(MarketError::ServiceNotFound {
                provider: PROVIDER,
                service_id: 2
            }))
        );
        assert!(chain.view().get_selections().is_empty());
    }

    #[test]
    fn test_providers_in_first_registration_order() {
        let chain = default_chain();
        market_add(&chain, OTHER_PROVIDER, 1);
        market_add(&chain, PROVIDER, 1);
        market_add(&chain, OTHER_PROVIDER, 2);

        assert_eq!(chain.view().get_providers(), vec![OTHER_PROVIDER, PROVIDER]);
        let offerings = chain
            .view()
            .market_provider_services(&OTHER_PROVIDER)
            .unwrap();
        assert_eq!(
            offerings.iter().map(|o| o.service_id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_repeated_selection_is_not_deduplicated() {
        let chain = default_chain();
        market_add(&chain, PROVIDER, 1);
        let select = Call::SelectService {
            provider: PROVIDER,
            service_id: 1,
        };

        chain.submit(CONSUMER, select.clone()).unwrap();
        chain.submit(CONSUMER, select.clone()).unwrap();
        chain.submit(PROVIDER, select).unwrap();

        assert_eq!(chain.view().get_selections().len(), 3);
    }

    #[test]
    fn test_service_id_zero_depends_on_policy() {
        let select_zero = Call::SelectService {
            provider: PROVIDER,
            service_id: 0,
        };

        let explicit = default_chain();
        market_add(&explicit, PROVIDER, 0);
        assert!(explicit.submit(CONSUMER, select_zero.clone()).is_ok());

        let legacy = LeaseChain::new(RuntimeConfig {
            market: MarketConfig {
                service_id_policy: ServiceIdPolicy::ReserveZero,
            },
            ..RuntimeConfig::default()
        });
        market_add(&legacy, PROVIDER, 0);
        market_add(&legacy, PROVIDER, 0);
        assert_eq!(
            legacy.submit(CONSUMER, select_zero),
            Err(TxError::Market(MarketError::ServiceNotFound {
                provider: PROVIDER,
                service_id: 0
            }))
        );
        // Re-adding id 0 appends it again under the legacy encoding.
        assert_eq!(
            legacy.view().market_provider_services(&PROVIDER).unwrap().len(),
            2
        );
    }
}
