//! # Event Delivery
//!
//! Subscribers see committed events in commit order, filtered by topic or party.

#[cfg(test)]
mod tests {
    use crate::fixtures::{breach, default_chain, market_add, CONSUMER, OTHER_PROVIDER, PROVIDER};
    use lease_runtime::Call;
    use shared_bus::EventFilter;
    use shared_types::{EventTopic, MarketEvent, U256};
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_subscriber_receives_commit_order() {
        let chain = default_chain();
        let mut subscription = chain.subscribe(EventFilter::all());

        market_add(&chain, PROVIDER, 1);
        chain
            .submit(
                CONSUMER,
                Call::SelectService {
                    provider: PROVIDER,
                    service_id: 1,
                },
            )
            .unwrap();
        breach(&chain, PROVIDER, 10).unwrap();

        let mut names = Vec::new();
        for _ in 0..4 {
            let event = timeout(Duration::from_secs(1), subscription.recv())
                .await
                .expect("event should arrive")
                .expect("bus open");
            names.push(event.name());
        }
        assert_eq!(
            names,
            vec![
                "ServiceAdded",
                "ServiceSelected",
                "BreachRegistered",
                "PenaltyCalculated"
            ]
        );
    }

    #[tokio::test]
    async fn test_reverted_call_never_reaches_subscriber() {
        let chain = default_chain();
        let mut subscription = chain.subscribe(EventFilter::all());

        assert!(breach(&chain, PROVIDER, 150).is_err());
        breach(&chain, PROVIDER, 1).unwrap();

        let event = timeout(Duration::from_secs(1), subscription.recv())
            .await
            .expect("event should arrive")
            .expect("bus open");
        assert_eq!(
            event,
            MarketEvent::BreachRegistered {
                party: PROVIDER,
                cumulative_count: U256::from(1)
            }
        );
        assert!(subscription.drain().is_empty());
    }

    #[test]
    fn test_topic_filter() {
        let chain = default_chain();
        let mut enforcement = chain.subscribe(EventFilter::topics(vec![EventTopic::Enforcement]));

        market_add(&chain, PROVIDER, 1);
        breach(&chain, PROVIDER, 2).unwrap();

        let events = enforcement.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].topic(), EventTopic::Enforcement);
    }

    #[test]
    fn test_party_filter_matches_consumer_and_provider() {
        let chain = default_chain();
        let mut consumer_feed = chain.subscribe(EventFilter::parties(vec![CONSUMER]));

        market_add(&chain, PROVIDER, 1);
        market_add(&chain, OTHER_PROVIDER, 1);
        chain
            .submit(
                CONSUMER,
                Call::SelectService {
                    provider: OTHER_PROVIDER,
                    service_id: 1,
                },
            )
            .unwrap();

        assert_eq!(
            consumer_feed.drain(),
            vec![MarketEvent::ServiceSelected {
                consumer: CONSUMER,
                provider: OTHER_PROVIDER,
                service_id: 1
            }]
        );
    }

    #[test]
    fn test_receipt_serializes_to_json() {
        let chain = default_chain();
        let receipt = breach(&chain, PROVIDER, 10).unwrap();

        let json = serde_json::to_value(&receipt).unwrap();
        let events = json["events"].as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[1].get("PenaltyCalculated").is_some());
    }

    #[test]
    fn test_call_decodes_from_json() {
        let call: Call = serde_json::from_str(r#"{"call":"register_breach","count":"0xa"}"#).unwrap();
        assert_eq!(
            call,
            Call::RegisterBreach {
                count: U256::from(10)
            }
        );
    }
}
