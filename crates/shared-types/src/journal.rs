//! # Event Journal
//!
//! Per-transaction buffer of notifications. A component records into the
//! journal it is handed; the runtime publishes the journal only when the whole
//! transaction succeeds. Nested calls that may fail take a checkpoint first and
//! roll back to it on error.

use crate::events::MarketEvent;

/// Position in a journal that can be rolled back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalCheckpoint(usize);

/// Ordered, append-only (until rollback) list of staged events.
#[derive(Debug, Default, Clone)]
pub struct EventJournal {
    events: Vec<MarketEvent>,
}

impl EventJournal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an event.
    pub fn record(&mut self, event: MarketEvent) {
        self.events.push(event);
    }

    /// Mark the current position.
    #[must_use]
    pub fn checkpoint(&self) -> JournalCheckpoint {
        JournalCheckpoint(self.events.len())
    }

    /// Discard every event staged after `checkpoint`.
    pub fn revert_to(&mut self, checkpoint: JournalCheckpoint) {
        self.events.truncate(checkpoint.0);
    }

    /// Staged events in emission order.
    #[must_use]
    pub fn events(&self) -> &[MarketEvent] {
        &self.events
    }

    /// Number of staged events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the journal, yielding its events.
    #[must_use]
    pub fn into_events(self) -> Vec<MarketEvent> {
        self.events
    }
}
