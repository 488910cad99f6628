//! Alert Webhook Receiver - Main Entry Point

use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Alert Webhook Receiver v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting alert webhook receiver...");

    // Start the webhook server
    let config = ServerConfig::default();
    run_server(&config.bind_addr()).await?;

    Ok(())
}
