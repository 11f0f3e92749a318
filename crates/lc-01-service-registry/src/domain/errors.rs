//! # Domain Errors
//!
//! Error types for the Service Registry.

use super::entities::ServiceIndex;
use thiserror::Error;

/// Service registry error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Index is not below the number of registered services.
    #[error("Index out of range: {index} >= {count}")]
    IndexOutOfRange {
        /// Requested index
        index: ServiceIndex,
        /// Number of registered services
        count: usize,
    },
}
