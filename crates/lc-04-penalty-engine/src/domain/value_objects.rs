//! # Domain Value Objects

use shared_types::U256;

/// Breach counts at or above this value (10^18) are rejected outright.
pub const OVERFLOW_CEILING: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// Largest breach count for which `100 - count` does not underflow.
pub const FORMULA_DOMAIN_MAX: u64 = 100;

/// Divisor applied after the product.
pub const PENALTY_DIVISOR: u64 = 100;
