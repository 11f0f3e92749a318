//! # Penalty Formula
//!
//! `penalty = count * (count + 1) * (100 - count) / 100`, truncating,
//! with every step checked.

use crate::domain::{FORMULA_DOMAIN_MAX, OVERFLOW_CEILING, PENALTY_DIVISOR};
use shared_types::{PenaltyError, U256};

/// Compute the penalty for a cumulative breach count.
///
/// # Errors
///
/// - `OverflowGuard` when `count >= 10^18`
/// - `ArithmeticUnderflow` when `100 < count < 10^18`
pub fn compute_penalty(count: U256) -> Result<U256, PenaltyError> {
    // 1. Ceiling
    if count >= OVERFLOW_CEILING {
        return Err(PenaltyError::OverflowGuard {
            breach_count: count,
        });
    }

    // 2. (100 - count)
    let remaining = U256::from(FORMULA_DOMAIN_MAX)
        .checked_sub(count)
        .ok_or(PenaltyError::ArithmeticUnderflow {
            breach_count: count,
        })?;

    // 3. Product; cannot exceed 256 bits below the ceiling.
    let product = count
        .checked_add(U256::one())
        .and_then(|next| count.checked_mul(next))
        .and_then(|p| p.checked_mul(remaining))
        .ok_or(PenaltyError::OverflowGuard {
            breach_count: count,
        })?;

    Ok(product / U256::from(PENALTY_DIVISOR))
}
