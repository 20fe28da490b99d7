//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload and the moment it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes, never inspected by the cache
    pub payload: Vec<u8>,
    /// Insertion time on the monotonic clock
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`, saturating at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// live; only a strictly greater age counts as expired.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec![1, 2, 3]);

        assert_eq!(entry.payload, vec![1, 2, 3]);
        assert!(!entry.is_expired_at(Instant::now(), Duration::from_secs(60)));
    }

    #[test]
    fn test_empty_payload() {
        let entry = CacheEntry::new(Vec::new());
        assert!(entry.payload.is_empty());
    }

    #[test]
    fn test_age_before_creation_is_zero() {
        let now = Instant::now();
        let entry = CacheEntry {
            payload: vec![],
            created_at: now + Duration::from_secs(1),
        };

        assert_eq!(entry.age_at(now), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let created = Instant::now();
        let entry = CacheEntry {
            payload: b"test".to_vec(),
            created_at: created,
        };
        let ttl = Duration::from_secs(5);

        assert!(!entry.is_expired_at(created + ttl, ttl), "Age == ttl is still live");
        assert!(entry.is_expired_at(created + ttl + Duration::from_millis(1), ttl));
    }
}
