//! # Lease-Chain Runtime
//!
//! Runs a scripted marketplace and enforcement scenario against a freshly
//! deployed chain.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Validate the deployer and event capacity
//! 3. Initialize logging and metrics
//! 4. Deploy contracts
//! 5. Start the event listener
//! 6. Run the scenario, then print receipts and metrics
//!
//! ## Scenario
//!
//! ```text
//! providers list services ──→ consumer selects ──→ provider breaches
//!                                                        │ cumulative >= 10
//!                                                        ↓
//!                                                 PenaltyCalculated
//! ```

use anyhow::{Context, Result};
use lease_telemetry::log_event;
use shared_bus::EventFilter;
use shared_types::{PartyId, U256};
use tokio::sync::watch;
use tracing::{error, info, warn};

use lease_runtime::{Call, LeaseChain, Receipt, RuntimeConfig};

/// Submit a call, logging a revert instead of aborting the scenario.
fn step(chain: &LeaseChain, receipts: &mut Vec<Receipt>, caller: PartyId, call: Call) {
    let operation = call.operation();
    match chain.submit(caller, call) {
        Ok(receipt) => receipts.push(receipt),
        Err(err) => warn!(operation, caller = %caller, error = %err, "Scenario step reverted"),
    }
}

fn run_scenario(chain: &LeaseChain, owner: PartyId) -> Result<Vec<Receipt>> {
    let provider_a = PartyId::from_low_u64(0xA1);
    let provider_b = PartyId::from_low_u64(0xB2);
    let consumer = PartyId::from_low_u64(0xC3);
    let mut receipts = Vec::new();

    info!("--- Marketplace ---");
    for (provider, id, location, cost) in [
        (provider_a, "cpu-small", "eu-west", 10u64),
        (provider_a, "gpu-large", "eu-west", 250),
        (provider_b, "storage-1tb", "us-east", 40),
    ] {
        step(
            chain,
            &mut receipts,
            provider,
            Call::RegistryAddService {
                service_id: id.to_string(),
                location: location.to_string(),
                cost: U256::from(cost),
            },
        );
    }

    for (provider, id, location, cost) in [
        (provider_a, 1u64, "eu-west/rack-3", 10u64),
        (provider_a, 2, "eu-west/rack-9", 250),
        (provider_b, 1, "us-east/vault", 40),
    ] {
        step(
            chain,
            &mut receipts,
            provider,
            Call::MarketAddService {
                service_id: id,
                location: location.to_string(),
                cost: U256::from(cost),
            },
        );
    }

    step(
        chain,
        &mut receipts,
        consumer,
        Call::SelectService {
            provider: provider_a,
            service_id: 2,
        },
    );
    // Unknown service: reverted.
    step(
        chain,
        &mut receipts,
        consumer,
        Call::SelectService {
            provider: provider_b,
            service_id: 7,
        },
    );

    info!("--- Enforcement ---");
    for count in [4u64, 5, 1] {
        step(
            chain,
            &mut receipts,
            provider_b,
            Call::RegisterBreach {
                count: U256::from(count),
            },
        );
    }

    let primary = chain.view().primary_engine_address();
    // Only the ledger may compute penalties: reverted.
    step(
        chain,
        &mut receipts,
        consumer,
        Call::CalculatePenalty {
            engine: primary,
            party: provider_b,
        },
    );

    let replacement = chain
        .deploy_penalty_engine(owner)
        .context("Failed to deploy replacement penalty engine")?;
    // Non-owner repoint: reverted under the default policy.
    step(
        chain,
        &mut receipts,
        consumer,
        Call::SetPenaltyEngine {
            engine: replacement,
        },
    );
    step(
        chain,
        &mut receipts,
        owner,
        Call::SetPenaltyEngine {
            engine: replacement,
        },
    );
    step(
        chain,
        &mut receipts,
        provider_b,
        Call::RegisterBreach {
            count: U256::zero(),
        },
    );

    let view = chain.view();
    info!(
        services = view.total_services(),
        providers = view.get_providers().len(),
        selections = view.get_selections().len(),
        breaches = %view.breach_count(&provider_b),
        penalty_primary = %view.penalty_of(&provider_b),
        penalty_replacement = %view.penalty_in(&replacement, &provider_b)?,
        "Scenario finished"
    );

    Ok(receipts)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Step 1-2: configuration
    let config = RuntimeConfig::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    // Step 3: telemetry
    let _telemetry = lease_telemetry::init_telemetry(config.telemetry.clone())
        .context("Failed to initialize telemetry")?;

    info!("===========================================");
    info!("  Lease-Chain Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    // Step 4: deployment
    let owner = config.deployer;
    let chain = LeaseChain::new(config);

    // Step 5: event listener
    let mut subscription = chain.subscribe(EventFilter::all());
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let listener = tokio::spawn(async move {
        let mut seen = 0usize;
        loop {
            tokio::select! {
                biased;
                event = subscription.recv() => match event {
                    Some(event) => {
                        seen += 1;
                        log_event!(
                            info,
                            "runtime",
                            "Event committed",
                            event = event.name(),
                            topic = ?event.topic()
                        );
                    }
                    None => break,
                },
                _ = shutdown_rx.changed() => {
                    for event in subscription.drain() {
                        seen += 1;
                        log_event!(debug, "runtime", "Event drained", event = event.name());
                    }
                    break;
                }
            }
        }
        (seen, subscription.missed())
    });

    // Step 6: scenario
    let receipts = run_scenario(&chain, owner)?;

    if let Err(e) = shutdown_tx.send(true) {
        error!("Failed to send shutdown signal: {}", e);
    }
    let (seen, missed) = listener.await.context("Event listener panicked")?;

    let stats = chain.stats();
    info!(
        committed = stats.committed,
        reverted = stats.reverted,
        events = seen,
        missed,
        "Transactions processed"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&receipts).context("Failed to encode receipts")?
    );
    println!(
        "{}",
        lease_telemetry::gather_metrics().context("Failed to gather metrics")?
    );

    Ok(())
}
