//! TTL Cache Module
//!
//! The public cache handle: a [`CacheStore`] paired with the sweep task that
//! keeps it trimmed, and the shutdown signal that stops that task.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::config::{validate_ttl, Config};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_task;

// == TTL Cache ==
/// Concurrent byte cache whose entries are swept out once they outlive the TTL.
///
/// Each instance owns exactly one background sweep task, which runs once per
/// TTL period. Expired entries disappear within one sweep interval of
/// expiring, so an entry may be observed for up to twice the TTL.
///
/// The sweep task stops on [`TtlCache::close`] or when the cache is dropped.
/// `add` and `get` keep working after that, but nothing expires any more.
///
/// `TtlCache` is `Send + Sync`; share it by reference or in an `Arc`.
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<CacheStore>,
    shutdown_tx: watch::Sender<bool>,
    sweeper: JoinHandle<()>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// The sweep runs every `ttl` on the current Tokio runtime.
    ///
    /// # Errors
    /// - [`CacheError::InvalidConfiguration`] if `ttl` is zero or too large to schedule
    /// - [`CacheError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(ttl: Duration) -> Result<Self> {
        validate_ttl(ttl)?;
        Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(CacheStore::new(ttl));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweep_task(store.clone(), ttl, shutdown_rx);

        info!(?ttl, "TTL cache created");

        Ok(Self {
            store,
            shutdown_tx,
            sweeper,
        })
    }

    /// Creates a cache from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.ttl())
    }

    // == Add ==
    /// Stores `payload` under `key`, replacing any previous entry and its age.
    ///
    /// Any key is accepted, including the empty string.
    pub fn add(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        self.store.add(key.into(), payload.into());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Eviction is driven by the sweep task, not by lookups: an entry older
    /// than the TTL is still returned until the next sweep pass removes it.
    /// Reading does not refresh an entry's age.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key)
    }

    // == Close ==
    /// Signals the sweep task to stop. Safe to call more than once.
    pub fn close(&self) {
        let was_closed = self.shutdown_tx.send_replace(true);
        if !was_closed {
            info!(entries = self.store.len(), "TTL cache closed");
        }
    }

    /// Returns true once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Returns true once the sweep task has actually exited.
    pub fn sweeper_finished(&self) -> bool {
        self.sweeper.is_finished()
    }

    /// Entry lifetime, which is also the sweep interval.
    pub fn ttl(&self) -> Duration {
        self.store.ttl()
    }

    /// Number of entries currently held, including stale ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        self.shutdown_tx.send_replace(true);
    }
}
