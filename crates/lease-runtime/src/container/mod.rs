//! # Contract Container
//!
//! Configuration and the set of deployed contract instances.

pub mod config;
pub mod contracts;

pub use config::{ConfigError, RuntimeConfig, DEFAULT_DEPLOYER};
pub use contracts::Contracts;
