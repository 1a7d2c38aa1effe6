//! Expiration Monitor
//!
//! Background task that periodically scans active auctions and closes
//! those whose expiration duration has elapsed.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::config::resolve_expiration_duration;
use crate::error::MonitorError;
use crate::models::{Auction, AuctionStatus};
use crate::store::AuctionStore;

// == Expiration Monitor ==
/// Runs a recurring background sweep over the store.
///
/// The monitor owns its lifecycle state exclusively: a stop signal and
/// the join handle of the single sweep loop. `stop` signals the loop and
/// waits for it to exit, so once `stop` returns no further sweep can run.
/// Multiple monitor instances can coexist; each carries its own signal
/// and handle.
pub struct ExpirationMonitor {
    /// Shared storage backend scanned on every tick
    store: Arc<dyn AuctionStore>,
    /// Interval between sweeps
    tick_period: Duration,
    /// Stop signal for the sweep loop
    stop_tx: Option<watch::Sender<bool>>,
    /// Completion handle of the sweep loop
    handle: Option<JoinHandle<()>>,
}

impl ExpirationMonitor {
    // == Constructor ==
    /// Creates a monitor that is not yet running.
    ///
    /// # Arguments
    /// * `store` - Storage backend shared with the rest of the process
    /// * `tick_period` - Interval between sweeps (1 minute in production,
    ///   shortened in tests)
    pub fn new(store: Arc<dyn AuctionStore>, tick_period: Duration) -> Self {
        Self {
            store,
            tick_period,
            stop_tx: None,
            handle: None,
        }
    }

    // == Start ==
    /// Spawns the background sweep loop.
    ///
    /// At most one loop may run per monitor instance; a second call while
    /// the loop is running returns `MonitorError::AlreadyStarted` instead
    /// of spawning a concurrent sweep.
    pub fn start(&mut self) -> Result<(), MonitorError> {
        if self.handle.is_some() {
            return Err(MonitorError::AlreadyStarted);
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        let store = Arc::clone(&self.store);
        let tick_period = self.tick_period;

        self.handle = Some(tokio::spawn(run_loop(store, tick_period, stop_rx)));
        self.stop_tx = Some(stop_tx);

        info!(
            "Expiration monitor started with tick period of {:?}",
            self.tick_period
        );
        Ok(())
    }

    // == Stop ==
    /// Signals the sweep loop to exit and waits for it to finish.
    ///
    /// Does not return before the background task has exited. Safe to
    /// call when no sweep is mid-flight or when the monitor was never
    /// started; a repeated call is a no-op.
    pub async fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }

        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                error!("Expiration monitor task failed: {}", err);
            }
        }
    }

    // == Is Running ==
    /// Returns true while the sweep loop is running.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

// == Sweep Loop ==
/// Loop body of the background task: sweep on every tick, exit on the
/// stop signal. Sweeps run inline in this task, so they are strictly
/// sequential and never overlap.
async fn run_loop(
    store: Arc<dyn AuctionStore>,
    tick_period: Duration,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(tick_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately; consume it so the
    // first sweep happens one full period after start.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                sweep(store.as_ref()).await;
            }
            _ = stop_rx.changed() => {
                info!("Expiration monitor stopped");
                return;
            }
        }
    }
}

// == Sweep ==
/// Runs one scan-and-close cycle.
///
/// A failed query skips the whole tick; the next tick retries naturally.
pub(crate) async fn sweep(store: &dyn AuctionStore) {
    let active = match store.find_by_status(AuctionStatus::Active).await {
        Ok(auctions) => auctions,
        Err(err) => {
            error!("Failed to query active auctions, skipping sweep: {}", err);
            return;
        }
    };

    let expiration = resolve_expiration_duration();
    close_expired(store, &active, expiration).await;

    debug!("Sweep complete, scanned {} active auctions", active.len());
}

// == Close Expired ==
/// Closes every auction in the batch whose expiration has passed.
///
/// Close failures are logged per auction and do not abort the rest of
/// the batch.
pub(crate) async fn close_expired(
    store: &dyn AuctionStore,
    auctions: &[Auction],
    expiration: Duration,
) {
    let now = Utc::now().timestamp();

    for auction in auctions {
        if !is_expired(auction.created_at, expiration, now) {
            continue;
        }

        info!("Closing expired auction {}", auction.id);
        if let Err(err) = store.close(&auction.id).await {
            error!("Failed to close expired auction {}: {}", auction.id, err);
        }
    }
}

// == Expiry Predicate ==
/// An auction is expired once `now` is strictly past `created_at` plus
/// the expiration duration. At the exact boundary it is still active.
pub(crate) fn is_expired(created_at: i64, expiration: Duration, now: i64) -> bool {
    now > created_at.saturating_add(expiration.as_secs() as i64)
}
