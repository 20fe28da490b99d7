//! Cache Module
//!
//! Provides a concurrent in-memory byte cache with background TTL sweeping.

mod entry;
mod stats;
mod store;
mod ttl_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl_cache::TtlCache;
