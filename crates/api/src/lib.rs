//! Alert Webhook API Server
//!
//! HTTP listener that receives alertmanager-style webhook notifications
//! and hands them to the alert logger.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod routes;

pub use config::ServerConfig;

/// Create the application router
pub fn create_router() -> Router {
    Router::new()
        .route("/webhook", post(routes::webhook::receive))
        .route("/health", get(health_handler))
        .layer(
            TraceLayer::new_for_http()
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Health check handler
async fn health_handler() -> &'static str {
    "Webhook server is running!"
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server until a shutdown signal arrives
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router();

    info!("Starting webhook server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Webhook server stopped");

    Ok(())
}

/// Wait for Ctrl-C
async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Shutdown signal received");
}
