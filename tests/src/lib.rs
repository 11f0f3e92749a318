//! # Lease-Chain Test Suite
//!
//! Unified test crate exercising the deployed contracts through the runtime.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Scenarios through LeaseChain::submit
//! │   ├── marketplace.rs
//! │   ├── enforcement.rs
//! │   ├── atomicity.rs
//! │   └── events.rs
//! │
//! └── properties/       # proptest invariants
//!     ├── registry.rs
//!     └── penalty.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lc-tests
//!
//! # By category
//! cargo test -p lc-tests integration::
//! cargo test -p lc-tests properties::
//! ```

pub mod fixtures;
pub mod integration;
pub mod properties;
