//! # Core Domain Entities
//!
//! Identity and numeric primitives used by every subsystem.
//!
//! - **Parties**: `PartyId`, the opaque 160-bit identity of a provider,
//!   consumer or deployed contract.
//! - **Numbers**: `U256` for costs, breach counts and penalties.

use crate::errors::PartyIdParseError;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// Length of a party identity in bytes.
pub const PARTY_ID_LEN: usize = 20;

/// Opaque 160-bit identity of a party or contract.
///
/// Contracts deployed by the runtime share this address space, which is
/// what lets the penalty engine authorize its caller by identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct PartyId(pub [u8; PARTY_ID_LEN]);

impl PartyId {
    /// The null identity.
    pub const ZERO: Self = Self([0u8; PARTY_ID_LEN]);

    /// Create from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; PARTY_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Create an identity whose low 8 bytes hold `value` (big-endian).
    ///
    /// Handy for tests and scripted scenarios.
    #[must_use]
    pub fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; PARTY_ID_LEN];
        bytes[PARTY_ID_LEN - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PARTY_ID_LEN] {
        &self.0
    }

    /// Whether this is the null identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; PARTY_ID_LEN]
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, PartyIdParseError> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        let decoded =
            hex::decode(digits).map_err(|e| PartyIdParseError::InvalidHex(e.to_string()))?;
        let bytes: [u8; PARTY_ID_LEN] =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| PartyIdParseError::InvalidLength {
                    expected: PARTY_ID_LEN,
                    actual: decoded.len(),
                })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartyId({self})")
    }
}

impl FromStr for PartyId {
    type Err = PartyIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; PARTY_ID_LEN]> for PartyId {
    fn from(bytes: [u8; PARTY_ID_LEN]) -> Self {
        Self(bytes)
    }
}

/// Derive the address of a contract deployed by `deployer` at `nonce`.
///
/// `address = keccak256(deployer || nonce_be)[12..]`
#[must_use]
pub fn derive_contract_address(deployer: &PartyId, nonce: u64) -> PartyId {
    let mut hasher = Keccak256::new();
    hasher.update(deployer.as_bytes());
    hasher.update(nonce.to_be_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; PARTY_ID_LEN];
    bytes.copy_from_slice(&digest[32 - PARTY_ID_LEN..]);
    PartyId(bytes)
}
