//! # LC-02 Service Selection Market
//!
//! Per-provider service catalogs plus a global log of consumer selections.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Providers publish numbered offerings; consumers pick one. A provider
//! becomes known the first time it adds a service, with no separate
//! registration step. Selections are never deduplicated.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Providers listed in first-registration order | `service.rs` - `add_service()` |
//! | Re-adding an id overwrites it without reordering | `domain/entities.rs` - `ProviderCatalog::upsert()` |
//! | Selections need a known provider and a present id | `service.rs` - `select_service()` |
//!
//! ## Service Id Presence
//!
//! Presence is tracked by map membership, so `0` is an ordinary id under
//! the default `ServiceIdPolicy::Explicit`. `ServiceIdPolicy::ReserveZero`
//! reproduces catalogs that encode "absent" as id `0`: such an offering is
//! stored but can never be found or selected.
//!
//! ## Events
//!
//! | Operation | Event |
//! |-----------|-------|
//! | `add_service` | `ServiceAdded` |
//! | `select_service` | `ServiceSelected` |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    MarketConfig, MarketError, ProviderCatalog, Selection, ServiceId, ServiceIdPolicy,
    ServiceOffering,
};
pub use ports::SelectionMarketApi;
pub use service::SelectionMarket;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;
