//! # Event Publisher
//!
//! Defines the publishing side of the event bus.

use crate::events::EventFilter;
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use parking_lot::RwLock;
use shared_types::{EventJournal, MarketEvent};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

/// Trait for publishing events to the bus.
pub trait EventPublisher: Send + Sync {
    /// Publish an event to the bus.
    ///
    /// # Returns
    ///
    /// The number of active subscribers that received the event.
    fn publish(&self, event: MarketEvent) -> usize;

    /// Publish every event of a committed journal, in order.
    ///
    /// Returns the total number of deliveries.
    fn publish_journal(&self, journal: EventJournal) -> usize {
        journal
            .into_events()
            .into_iter()
            .map(|event| self.publish(event))
            .sum()
    }

    /// Get the total number of events published.
    fn events_published(&self) -> u64;
}

/// In-memory implementation of the event bus.
///
/// Uses `tokio::sync::broadcast` for multi-consumer delivery and keeps
/// the committed history for later queries.
pub struct InMemoryEventBus {
    /// Broadcast sender for events.
    sender: broadcast::Sender<MarketEvent>,

    /// Every event ever published, in order.
    history: RwLock<Vec<MarketEvent>>,

    /// Total events published.
    events_published: AtomicU64,

    /// Channel capacity.
    capacity: usize,
}

impl InMemoryEventBus {
    /// Create a new in-memory event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new in-memory event bus with specified capacity.
    ///
    /// A capacity of zero is bumped to one, since a broadcast channel cannot be empty.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            history: RwLock::new(Vec::new()),
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to events matching a filter.
    ///
    /// Only events published after this call are delivered.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, parties = filter.parties.len(), "New subscription created");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Committed events matching a filter, in publish order.
    #[must_use]
    pub fn history(&self, filter: &EventFilter) -> Vec<MarketEvent> {
        self.history
            .read()
            .iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect()
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Get the channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: MarketEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        self.history.write().push(event.clone());

        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(event = name, receivers, "Event published");
                receivers
            }
            Err(_) => {
                // No live subscribers; the event is still in the history.
                debug!(event = name, "Event published (no subscribers)");
                0
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}
