//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired entries out of `store`.
///
/// The first pass runs one `interval` after spawning, then every `interval`.
/// The store lock is only taken for the pass itself, never while waiting.
///
/// The task exits when `true` is sent on the shutdown channel or when the
/// sender is dropped.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Time between sweep passes
/// * `shutdown_rx` - Receiver side of the shutdown flag
///
/// # Example
/// ```ignore
/// let store = Arc::new(CacheStore::new(Duration::from_secs(5)));
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_sweep_task(store.clone(), store.ttl(), shutdown_rx);
/// // Later, during shutdown:
/// let _ = shutdown_tx.send(true);
/// ```
pub fn spawn_sweep_task(
    store: Arc<CacheStore>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let Some(first_sweep) = Instant::now().checked_add(interval) else {
            // Nothing could ever expire; just wait to be stopped
            warn!(?interval, "TTL sweep interval out of range, sweeping disabled");
            while shutdown_rx.changed().await.is_ok() && !*shutdown_rx.borrow() {}
            info!("TTL sweep task stopped");
            return;
        };
        let mut ticker = interval_at(first_sweep, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(?interval, "Starting TTL sweep task");

        loop {
            tokio::select! {
                changed = shutdown_rx.changed() => {
                    // Err means the sender is gone, which also means stop
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let removed = store.remove_expired();
                    if removed > 0 {
                        info!(removed, remaining = store.len(), "TTL sweep: removed expired entries");
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
            }
        }

        info!("TTL sweep task stopped");
    })
}
