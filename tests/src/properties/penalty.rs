//! # Penalty Properties
//!
//! The stored penalty always equals the formula applied to the counter that
//! triggered it.

#[cfg(test)]
mod proptests {
    use crate::fixtures::{breach, default_chain, PROVIDER};
    use lc_04_penalty_engine::compute_penalty;
    use proptest::prelude::*;
    use shared_types::U256;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_stored_penalty_matches_formula(deltas in prop::collection::vec(0u64..15, 1..12)) {
            let chain = default_chain();
            let mut cumulative = 0u64;
            let mut expected = U256::zero();

            for delta in deltas {
                let next = cumulative + delta;
                let result = breach(&chain, PROVIDER, delta);
                if next > 100 {
                    prop_assert!(result.is_err());
                    continue;
                }
                prop_assert!(result.is_ok());
                cumulative = next;
                if cumulative >= 10 {
                    expected = compute_penalty(U256::from(cumulative)).unwrap();
                }
            }

            let view = chain.view();
            prop_assert_eq!(view.breach_count(&PROVIDER), U256::from(cumulative));
            prop_assert_eq!(view.penalty_of(&PROVIDER), expected);
        }

        #[test]
        fn prop_formula_is_deterministic(count in 0u64..=100) {
            let value = U256::from(count);
            prop_assert_eq!(compute_penalty(value), compute_penalty(value));
            let expected = count * (count + 1) * (100 - count) / 100;
            prop_assert_eq!(compute_penalty(value).unwrap(), U256::from(expected));
        }
    }
}
