//! # Registry Properties
//!
//! Index assignment is dense and follows call order for any call sequence.

#[cfg(test)]
mod proptests {
    use lc_01_service_registry::{ServiceRegistry, ServiceRegistryApi};
    use proptest::prelude::*;
    use shared_types::{PartyId, U256};

    fn arb_call() -> impl Strategy<Value = (u64, String, u64)> {
        (1u64..4, "[a-z]{1,6}", any::<u64>())
    }

    proptest! {
        #[test]
        fn prop_get_service_returns_ith_add(calls in prop::collection::vec(arb_call(), 0..40)) {
            let mut registry = ServiceRegistry::new(PartyId::from_low_u64(0xFEED));

            for (i, (provider, id, cost)) in calls.iter().enumerate() {
                let index = registry.add_service(
                    PartyId::from_low_u64(*provider),
                    id.clone(),
                    format!("loc-{i}"),
                    U256::from(*cost),
                );
                prop_assert_eq!(index, i);
            }

            prop_assert_eq!(registry.total_services(), calls.len());
            for (i, (provider, id, cost)) in calls.iter().enumerate() {
                let record = registry.get_service(i).unwrap();
                prop_assert_eq!(record.provider, PartyId::from_low_u64(*provider));
                prop_assert_eq!(&record.service_id, id);
                prop_assert_eq!(record.cost, U256::from(*cost));
            }
            prop_assert!(registry.get_service(calls.len()).is_err());
        }

        #[test]
        fn prop_provider_indices_partition_registry(providers in prop::collection::vec(1u64..5, 0..40)) {
            let mut registry = ServiceRegistry::new(PartyId::from_low_u64(0xFEED));
            for provider in &providers {
                registry.add_service(
                    PartyId::from_low_u64(*provider),
                    "svc".to_string(),
                    "loc".to_string(),
                    U256::one(),
                );
            }

            let mut total = 0;
            for provider in 1u64..5 {
                let party = PartyId::from_low_u64(provider);
                let indices = registry.get_provider_services(&party);
                prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
                for index in indices {
                    prop_assert_eq!(registry.get_service(*index).unwrap().provider, party);
                }
                total += indices.len();
            }
            prop_assert_eq!(total, providers.len());
        }
    }
}
