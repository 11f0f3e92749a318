//! # Chain Module
//!
//! Transaction execution against the deployed contracts.

pub mod call;
pub mod error;
pub mod executor;
pub mod view;

pub use call::{Call, CallOutput, Receipt};
pub use error::TxError;
pub use executor::{ChainStats, LeaseChain};
pub use view::ChainView;
