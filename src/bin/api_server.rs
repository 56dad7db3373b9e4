// API Server Binary Entry Point
//
// Purpose: Serve the plant catalog over HTTP
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use herbal_garden::{AppState, create_router};
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "herbal_garden=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let bind_addr: IpAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0".to_string())
        .parse()
        .context("BIND_ADDR is not a valid IP address")?;

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", bind_addr);
    tracing::info!("  PORT: {}", port);

    let state = AppState::new()?;
    tracing::info!("Catalog ready ({} plants)", state.catalog.len());

    let app = create_router(state);

    let addr = SocketAddr::new(bind_addr, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
