//! Auction Keeper - auction persistence with automatic expiration
//!
//! Daemon entry point: wires the store and the expiration monitor
//! together and runs until a shutdown signal arrives.

use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auction_keeper::{AuctionStore, Config, ExpirationMonitor, MemoryStore};

/// Main entry point for the auction keeper daemon.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the auction store
/// 4. Start the background expiration monitor
/// 5. Wait for SIGINT/SIGTERM
/// 6. Stop the monitor and wait for its loop to exit
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auction_keeper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting auction keeper");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: tick_period={:?}",
        config.tick_period
    );

    // Create the store shared by the monitor and any external callers
    let store: Arc<dyn AuctionStore> = Arc::new(MemoryStore::new());
    info!("Auction store initialized");

    // Start the background expiration monitor
    let mut monitor = ExpirationMonitor::new(Arc::clone(&store), config.tick_period);
    monitor.start()?;

    // Run until a shutdown signal arrives
    shutdown_signal().await;

    // Stop the monitor; returns only once its loop has exited
    monitor.stop().await;
    info!("Shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
