//! # Enforcement Flows
//!
//! Breach ledger to penalty engine, including authorization and repointing.

#[cfg(test)]
mod tests {
    use crate::fixtures::{breach, default_chain, CONSUMER, PROVIDER};
    use lc_03_breach_ledger::{BreachOutcome, LedgerConfig, LedgerError, RepointPolicy};
    use lease_runtime::{Call, CallOutput, LeaseChain, RuntimeConfig, TxError};
    use shared_types::{MarketEvent, PenaltyError, U256};

    fn penalty_events(events: &[MarketEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, MarketEvent::PenaltyCalculated { .. }))
            .count()
    }

    #[test]
    fn test_nine_breaches_never_trigger() {
        let chain = default_chain();
        for count in [2, 3, 4] {
            let receipt = breach(&chain, PROVIDER, count).unwrap();
            assert_eq!(penalty_events(&receipt.events), 0);
        }

        assert_eq!(chain.view().breach_count(&PROVIDER), U256::from(9));
        assert_eq!(chain.view().penalty_of(&PROVIDER), U256::zero());
    }

    #[test]
    fn test_reaching_ten_triggers_exactly_once() {
        let chain = default_chain();
        breach(&chain, PROVIDER, 9).unwrap();
        let receipt = breach(&chain, PROVIDER, 1).unwrap();

        assert_eq!(
            receipt.output,
            CallOutput::Breach(BreachOutcome {
                cumulative: U256::from(10),
                penalty: Some(U256::from(99)),
            })
        );
        assert_eq!(
            receipt.events,
            vec![
                MarketEvent::BreachRegistered {
                    party: PROVIDER,
                    cumulative_count: U256::from(10)
                },
                MarketEvent::PenaltyCalculated {
                    party: PROVIDER,
                    penalty: U256::from(99)
                },
            ]
        );
        assert_eq!(chain.view().penalty_of(&PROVIDER), U256::from(99));
    }

    #[test]
    fn test_every_later_call_retriggers() {
        let chain = default_chain();
        breach(&chain, PROVIDER, 10).unwrap();

        let again = breach(&chain, PROVIDER, 0).unwrap();
        assert_eq!(penalty_events(&again.events), 1);

        let more = breach(&chain, PROVIDER, 40).unwrap();
        assert_eq!(penalty_events(&more.events), 1);
        // 50 * 51 * 50 / 100
        assert_eq!(chain.view().penalty_of(&PROVIDER), U256::from(1275));
    }

    #[test]
    fn test_unchanged_count_stores_same_penalty() {
        let chain = default_chain();
        breach(&chain, PROVIDER, 12).unwrap();
        let first = chain.view().penalty_of(&PROVIDER);
        breach(&chain, PROVIDER, 0).unwrap();

        assert_eq!(chain.view().penalty_of(&PROVIDER), first);
    }

    #[test]
    fn test_counters_are_isolated_per_party() {
        let chain = default_chain();
        breach(&chain, PROVIDER, 10).unwrap();
        breach(&chain, CONSUMER, 3).unwrap();

        let view = chain.view();
        assert_eq!(view.breach_count(&PROVIDER), U256::from(10));
        assert_eq!(view.breach_count(&CONSUMER), U256::from(3));
        assert_eq!(view.penalty_of(&CONSUMER), U256::zero());
    }

    #[test]
    fn test_direct_penalty_call_is_rejected() {
        let chain = default_chain();
        breach(&chain, PROVIDER, 10).unwrap();
        let (engine, ledger) = {
            let view = chain.view();
            (view.primary_engine_address(), view.ledger_address())
        };

        for caller in [PROVIDER, CONSUMER, chain.config().deployer] {
            let result = chain.submit(
                caller,
                Call::CalculatePenalty {
                    engine,
                    party: PROVIDER,
                },
            );
            assert_eq!(
                result,
                Err(TxError::Penalty(PenaltyError::UnauthorizedCaller {
                    caller,
                    expected: ledger
                }))
            );
        }
        assert_eq!(chain.view().penalty_of(&PROVIDER), U256::from(99));
    }

    #[test]
    fn test_count_above_hundred_underflows() {
        let chain = default_chain();
        let result = breach(&chain, PROVIDER, 101);

        assert_eq!(
            result,
            Err(TxError::Ledger(LedgerError::Penalty(
                PenaltyError::ArithmeticUnderflow {
                    breach_count: U256::from(101)
                }
            )))
        );
        assert_eq!(chain.view().breach_count(&PROVIDER), U256::zero());
    }

    #[test]
    fn test_count_at_ceiling_hits_overflow_guard() {
        let chain = default_chain();
        let result = chain.submit(
            PROVIDER,
            Call::RegisterBreach {
                count: U256::exp10(18),
            },
        );

        assert!(matches!(
            result,
            Err(TxError::Ledger(LedgerError::Penalty(
                PenaltyError::OverflowGuard { .. }
            )))
        ));
    }

    #[test]
    fn test_counter_overflow_is_rejected() {
        let chain = default_chain();
        // MAX from zero does not overflow but the engine rejects it, leaving
        // the counter at zero.
        let result = chain.submit(PROVIDER, Call::RegisterBreach { count: U256::MAX });
        assert!(matches!(
            result,
            Err(TxError::Ledger(LedgerError::Penalty(_)))
        ));

        breach(&chain, PROVIDER, 5).unwrap();
        let result = chain.submit(PROVIDER, Call::RegisterBreach { count: U256::MAX });
        assert_eq!(
            result,
            Err(TxError::Ledger(LedgerError::CounterOverflow {
                party: PROVIDER,
                current: U256::from(5),
                delta: U256::MAX,
            }))
        );
    }

    // =========================================================================
    // REPOINTING
    // =========================================================================

    #[test]
    fn test_owner_only_repoint() {
        let chain = default_chain();
        let owner = chain.config().deployer;
        let replacement = chain.deploy_penalty_engine(owner).unwrap();

        let denied = chain.submit(
            CONSUMER,
            Call::SetPenaltyEngine {
                engine: replacement,
            },
        );
        assert_eq!(
            denied,
            Err(TxError::Ledger(LedgerError::NotOwner {
                caller: CONSUMER,
                owner
            }))
        );
        assert_ne!(chain.view().penalty_engine_address(), replacement);

        chain
            .submit(
                owner,
                Call::SetPenaltyEngine {
                    engine: replacement,
                },
            )
            .unwrap();
        breach(&chain, PROVIDER, 10).unwrap();

        let view = chain.view();
        assert_eq!(view.penalty_engine_address(), replacement);
        assert_eq!(view.penalty_in(&replacement, &PROVIDER), Ok(U256::from(99)));
        assert_eq!(view.penalty_of(&PROVIDER), U256::zero());
    }

    #[test]
    fn test_unrestricted_repoint() {
        let chain = LeaseChain::new(RuntimeConfig {
            ledger: LedgerConfig {
                repoint_policy: RepointPolicy::Unrestricted,
            },
            ..RuntimeConfig::default()
        });
        let replacement = chain.deploy_penalty_engine(CONSUMER).unwrap();

        chain
            .submit(
                CONSUMER,
                Call::SetPenaltyEngine {
                    engine: replacement,
                },
            )
            .unwrap();
        assert_eq!(chain.view().penalty_engine_address(), replacement);
    }
}
