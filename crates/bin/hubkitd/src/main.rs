//! # hubkitd — hub bridge daemon
//!
//! Composition root that wires the HTTP adapter into the application layer.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise structured logging
//! - Construct the hub client and discovery adapters
//! - Run one discovery cycle and build the accessory registry
//! - Snapshot every accessory and print the inventory as JSON on stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use hubkit_adapter_hub_http::{HttpHubClient, HttpHubDiscovery};
use hubkit_app::services::discovery_service::DiscoveryService;
use hubkit_app::services::inventory::Inventory;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // Logs go to stderr so stdout only carries the inventory.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    // Adapters
    let client = HttpHubClient::new(&config.hub)?;
    let discovery = HttpHubDiscovery::new(config.hub)?;

    // Discovery
    let service = DiscoveryService::new(discovery, client);
    let registry = service.discover().await?;

    // Inventory
    let inventory = Inventory::collect(&registry).await;
    tracing::info!(
        accessories = inventory.accessories.len(),
        skipped = inventory.skipped,
        failures = inventory.failures(),
        "inventory collected"
    );
    println!("{}", serde_json::to_string_pretty(&inventory)?);

    Ok(())
}
