//! Error types for the TTL cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the TTL cache.
///
/// Lookups on missing keys are not errors; they return `None`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Rejected configuration value (e.g. a zero TTL)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The sweep task needs a Tokio runtime to be spawned on
    #[error("No Tokio runtime available to run the sweep task")]
    NoRuntime,
}

// == Result Type Alias ==
/// Convenience Result type for the TTL cache.
pub type Result<T> = std::result::Result<T, CacheError>;
