//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment variables.

use std::env;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{CacheError, Result};

/// Default TTL in seconds when `CACHE_TTL_SECS` is unset or unparseable.
pub const DEFAULT_TTL_SECS: u64 = 5;

/// Cache configuration parameters.
///
/// The TTL is the only recognized option; it also sets the sweep interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Entry time-to-live in seconds
    pub ttl_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL and sweep interval in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
        }
    }

    /// Returns the configured TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Rejects configurations the cache cannot run with.
    pub fn validate(&self) -> Result<()> {
        validate_ttl(self.ttl())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

/// A zero TTL would make the sweep interval zero as well. The first sweep
/// deadline is `now + ttl`, so that sum must be representable.
pub(crate) fn validate_ttl(ttl: Duration) -> Result<()> {
    if ttl.is_zero() {
        return Err(CacheError::InvalidConfiguration(
            "ttl must be a positive duration".to_string(),
        ));
    }
    if Instant::now().checked_add(ttl).is_none() {
        return Err(CacheError::InvalidConfiguration(format!(
            "ttl of {:?} is too large to schedule",
            ttl
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ttl_secs, 5);
        assert_eq!(config.ttl(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    // Env access is kept in a single test so parallel tests don't race on it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_TTL_SECS");
        assert_eq!(Config::from_env().ttl_secs, DEFAULT_TTL_SECS);

        env::set_var("CACHE_TTL_SECS", "30");
        assert_eq!(Config::from_env().ttl_secs, 30);

        env::set_var("CACHE_TTL_SECS", "not-a-number");
        assert_eq!(Config::from_env().ttl_secs, DEFAULT_TTL_SECS);

        env::remove_var("CACHE_TTL_SECS");
    }

    #[test]
    fn test_validate_rejects_unschedulable_ttl() {
        let config = Config { ttl_secs: u64::MAX };
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            validate_ttl(Duration::MAX),
            Err(CacheError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_accepts_long_ttl() {
        let config = Config {
            ttl_secs: 365 * 24 * 60 * 60,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config = Config { ttl_secs: 0 };
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfiguration(_))
        ));
    }
}
