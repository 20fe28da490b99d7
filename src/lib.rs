//! TTL Cache - A concurrent in-memory byte cache
//!
//! Stores opaque payloads under string keys and sweeps out entries older than
//! a fixed TTL from a background task.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, TtlCache};
pub use config::Config;
pub use error::{CacheError, Result};
