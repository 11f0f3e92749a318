//! # LC-01 Service Registry
//!
//! Append-only catalog of services offered by providers.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Every `add_service` call appends one `ServiceRecord` to a global arena and
//! records its position in the caller's index list. Nothing is ever removed,
//! so a `ServiceIndex` stays valid for the lifetime of the registry.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Global index is dense (`0..N-1`) and stable | `service.rs` - arena is push-only |
//! | Lookups outside `0..N-1` fail | `service.rs` - `get_service()` |
//! | Provider index lists are in insertion order | `service.rs` - `add_service()` |
//!
//! No uniqueness is enforced: the same provider may register the same
//! service id any number of times.
//!
//! ## Module Structure
//!
//! ```text
//! lc-01-service-registry/
//! ├── domain/          # ServiceRecord, ServiceIndex, RegistryError
//! ├── ports/           # ServiceRegistryApi
//! └── service.rs       # ServiceRegistry
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{RegistryError, ServiceIndex, ServiceRecord};
pub use ports::ServiceRegistryApi;
pub use service::ServiceRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;
