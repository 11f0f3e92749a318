//! # Lease Runtime Library
//!
//! Deploys the Lease-Chain contracts and executes transactions against them.
//! The demo entry point is the `main.rs` binary.
//!
//! ## Architectural Patterns
//!
//! - **Transactional execution**: one call at a time behind a single lock
//! - **Staged events**: contracts emit into a journal, the runtime publishes
//!   it to the bus only on commit
//! - **Typed capabilities**: ledger and engines are wired through
//!   `PenaltyComputer` / `BreachSource` at deployment
//!
//! ## Modules
//!
//! - `container/` - configuration and deployed contract set
//! - `chain/` - calls, receipts, executor and read view

#![warn(missing_docs)]

pub mod chain;
pub mod container;

pub use chain::{Call, CallOutput, ChainStats, ChainView, LeaseChain, Receipt, TxError};
pub use container::{ConfigError, Contracts, RuntimeConfig, DEFAULT_DEPLOYER};
