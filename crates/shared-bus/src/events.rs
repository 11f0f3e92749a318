//! # Event Filters
//!
//! Subscription filters over `MarketEvent`.

use shared_types::{EventTopic, MarketEvent, PartyId};

/// Filter for event subscriptions.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Parties to include (as provider, consumer or penalized party).
    /// Empty means all parties.
    pub parties: Vec<PartyId>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            parties: Vec::new(),
        }
    }

    /// Create a filter for events involving specific parties.
    #[must_use]
    pub fn parties(parties: Vec<PartyId>) -> Self {
        Self {
            topics: Vec::new(),
            parties,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &MarketEvent) -> bool {
        let topic_match = self.topics.is_empty() || self.topics.contains(&event.topic());

        let party_match = self.parties.is_empty()
            || involved_parties(event)
                .iter()
                .any(|party| self.parties.contains(party));

        topic_match && party_match
    }
}

fn involved_parties(event: &MarketEvent) -> Vec<PartyId> {
    match event {
        MarketEvent::ServiceAdded { provider, .. } => vec![*provider],
        MarketEvent::ServiceSelected {
            consumer, provider, ..
        } => vec![*consumer, *provider],
        MarketEvent::BreachRegistered { party, .. }
        | MarketEvent::PenaltyCalculated { party, .. } => vec![*party],
    }
}
