//! # Error Types
//!
//! Defines error types used across subsystems.

use crate::entities::{PartyId, U256};
use thiserror::Error;

/// Errors from parsing a `PartyId`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartyIdParseError {
    /// Input was not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded input had the wrong number of bytes.
    #[error("invalid party id length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Errors a `PenaltyComputer` may return.
///
/// The breach ledger propagates these verbatim and reverts its own writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PenaltyError {
    /// Caller is not the ledger this engine is bound to.
    #[error("unauthorized caller: {caller} is not the bound breach ledger {expected}")]
    UnauthorizedCaller { caller: PartyId, expected: PartyId },

    /// Breach count is at or above the arithmetic ceiling.
    #[error("overflow guard: breach count {breach_count} exceeds the safe ceiling")]
    OverflowGuard { breach_count: U256 },

    /// `100 - breach_count` would go below zero.
    #[error("arithmetic underflow: penalty formula undefined for breach count {breach_count}")]
    ArithmeticUnderflow { breach_count: U256 },
}
