//! # Transaction Atomicity
//!
//! A reverted call leaves no state change and no published event.

#[cfg(test)]
mod tests {
    use crate::fixtures::{breach, default_chain, market_add, CONSUMER, PROVIDER};
    use lease_runtime::{Call, ChainStats, TxError};
    use shared_types::{MarketEvent, U256};

    #[test]
    fn test_failed_penalty_rolls_back_counter_and_events() {
        let chain = default_chain();
        breach(&chain, PROVIDER, 60).unwrap();
        let history_before = chain.event_history();

        // 60 + 50 = 110 is outside the formula domain.
        assert!(breach(&chain, PROVIDER, 50).is_err());

        let view = chain.view();
        assert_eq!(view.breach_count(&PROVIDER), U256::from(60));
        assert_eq!(view.penalty_of(&PROVIDER), U256::from(60 * 61 * 40 / 100));
        drop(view);
        assert_eq!(chain.event_history(), history_before);
    }

    #[test]
    fn test_failed_first_breach_leaves_no_counter() {
        let chain = default_chain();

        assert!(breach(&chain, PROVIDER, 101).is_err());
        assert_eq!(chain.view().breach_count(&PROVIDER), U256::zero());
        assert!(chain.event_history().is_empty());

        // The party can still register within the domain afterwards.
        breach(&chain, PROVIDER, 10).unwrap();
        assert_eq!(chain.view().penalty_of(&PROVIDER), U256::from(99));
    }

    #[test]
    fn test_rejected_selection_publishes_nothing() {
        let chain = default_chain();
        market_add(&chain, PROVIDER, 1);
        let before = chain.event_history().len();

        let result = chain.submit(
            CONSUMER,
            Call::SelectService {
                provider: PROVIDER,
                service_id: 9,
            },
        );

        assert!(matches!(result, Err(TxError::Market(_))));
        assert_eq!(chain.event_history().len(), before);
    }

    #[test]
    fn test_contract_caller_is_rejected_before_dispatch() {
        let chain = default_chain();
        let ledger = chain.view().ledger_address();

        assert_eq!(
            breach(&chain, ledger, 10),
            Err(TxError::ContractCaller(ledger))
        );
        assert_eq!(chain.view().breach_count(&ledger), U256::zero());
        assert!(chain.event_history().is_empty());
    }

    #[test]
    fn test_stats_count_commits_and_reverts() {
        let chain = default_chain();
        market_add(&chain, PROVIDER, 1);
        breach(&chain, PROVIDER, 3).unwrap();
        let _ = breach(&chain, PROVIDER, 200);
        let _ = chain.submit(
            CONSUMER,
            Call::SelectService {
                provider: CONSUMER,
                service_id: 1,
            },
        );

        assert_eq!(
            chain.stats(),
            ChainStats {
                committed: 2,
                reverted: 2
            }
        );
    }

    #[test]
    fn test_receipt_events_match_published_history() {
        let chain = default_chain();
        let first = market_add(&chain, PROVIDER, 1);
        let second = breach(&chain, PROVIDER, 10).unwrap();

        let mut expected = first.events.clone();
        expected.extend(second.events.iter().cloned());
        assert_eq!(chain.event_history(), expected);
        assert_ne!(first.tx_id, second.tx_id);
        assert!(matches!(
            second.events.last(),
            Some(MarketEvent::PenaltyCalculated { .. })
        ));
    }
}
