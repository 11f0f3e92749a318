//! # Event Subscriber
//!
//! Receiving side of the bus. A subscriber that falls more than the channel
//! capacity behind skips ahead and counts what it missed; the bus history
//! still holds every committed event.

use crate::events::EventFilter;
use shared_types::MarketEvent;
use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::debug;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The event bus was dropped.
    #[error("Event bus closed")]
    Closed,
}

/// Filtered handle onto the bus.
pub struct Subscription {
    receiver: broadcast::Receiver<MarketEvent>,
    filter: EventFilter,
    /// Events skipped because this subscriber lagged.
    missed: u64,
}

impl Subscription {
    pub(crate) fn new(receiver: broadcast::Receiver<MarketEvent>, filter: EventFilter) -> Self {
        Self {
            receiver,
            filter,
            missed: 0,
        }
    }

    /// Wait for the next matching event. `None` once the bus is dropped.
    pub async fn recv(&mut self) -> Option<MarketEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.matches(&event) => return Some(event),
                Ok(_) => {}
                Err(RecvError::Lagged(count)) => self.note_lag(count),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next matching event if one is already buffered.
    pub fn try_recv(&mut self) -> Result<Option<MarketEvent>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Ok(_) => {}
                Err(TryRecvError::Lagged(count)) => self.note_lag(count),
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Closed) => return Err(SubscriptionError::Closed),
            }
        }
    }

    /// Drain every matching event currently buffered.
    pub fn drain(&mut self) -> Vec<MarketEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Filter this subscription was created with.
    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// Number of events skipped so far, matching or not.
    #[must_use]
    pub fn missed(&self) -> u64 {
        self.missed
    }

    fn note_lag(&mut self, count: u64) {
        self.missed = self.missed.saturating_add(count);
        debug!(lagged = count, total = self.missed, "Subscriber lagged, events skipped");
    }
}
