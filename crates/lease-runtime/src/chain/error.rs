//! # Transaction Errors

use lc_01_service_registry::RegistryError;
use lc_02_selection_market::MarketError;
use lc_03_breach_ledger::LedgerError;
use shared_types::{PartyId, PenaltyError};
use thiserror::Error;

/// Why a transaction was reverted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    /// Service registry rejected the call.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Selection market rejected the call.
    #[error(transparent)]
    Market(#[from] MarketError),

    /// Breach ledger rejected the call.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A directly invoked penalty engine rejected the call.
    #[error(transparent)]
    Penalty(#[from] PenaltyError),

    /// Contract addresses cannot originate transactions.
    #[error("contract address {0} cannot originate a transaction")]
    ContractCaller(PartyId),

    /// No penalty engine is deployed at the address.
    #[error("no penalty engine deployed at {0}")]
    UnknownContract(PartyId),
}

impl TxError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Registry(_) => "registry",
            Self::Market(_) => "market",
            Self::Ledger(_) => "ledger",
            Self::Penalty(_) => "penalty",
            Self::ContractCaller(_) => "contract_caller",
            Self::UnknownContract(_) => "unknown_contract",
        }
    }
}
