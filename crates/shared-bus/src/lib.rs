//! # Shared Bus - Event Bus for Lease-Chain Notifications
//!
//! Committed transactions publish their staged `MarketEvent`s here.
//! Subscribers receive them in commit order; the bus also keeps the full
//! committed history so callers can query what happened without subscribing
//! up front.
//!
//! ```text
//! ┌──────────────┐   publish_journal()   ┌──────────────┐
//! │  LeaseChain  │ ────────────────────→ │  Event Bus   │ ──→ subscribe()
//! │  (commit)    │                       │  + history   │ ──→ history()
//! └──────────────┘                       └──────────────┘
//! ```
//!
//! Journals from reverted transactions are dropped by the runtime and never
//! reach the bus.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::EventFilter;
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use shared_types::{EventTopic, MarketEvent};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
