//! Cache Store Module
//!
//! The shared map behind a cache: a HashMap of entries under a single
//! reader/writer lock, plus the sweep pass that drops entries older than the TTL.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Thread-safe key to payload storage with a fixed TTL.
///
/// All methods take `&self`; one lock guards the whole map.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Entry lifetime, fixed at construction
    ttl: Duration,
    /// Activity counters
    stats: StatsRecorder,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            stats: StatsRecorder::default(),
        }
    }

    // == Add ==
    /// Inserts or fully replaces the entry for `key`, resetting its age.
    pub fn add(&self, key: String, payload: Vec<u8>) {
        let entry = CacheEntry::new(payload);
        self.entries.write().insert(key, entry);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if any.
    ///
    /// Age is not checked here: an entry past its TTL is still returned until
    /// a sweep pass removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let payload = self
            .entries
            .read()
            .get(key)
            .map(|entry| entry.payload.clone());

        match payload {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        payload
    }

    // == Remove Expired ==
    /// Removes every entry older than the TTL as of now.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&self) -> usize {
        self.remove_expired_at(Instant::now())
    }

    /// Removes every entry older than the TTL as of `now`.
    pub fn remove_expired_at(&self, now: Instant) -> usize {
        let ttl = self.ttl;
        let removed = {
            let mut entries = self.entries.write();
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired_at(now, ttl));
            before - entries.len()
        };

        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    /// Entry lifetime this store was built with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries, swept or not.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
