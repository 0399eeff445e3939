//! Cache Entry Module
//!
//! Defines the structure for individual cached responses with TTL support.

use serde_json::Value;

// == Cache Entry ==
/// A cached payload with the metadata needed to decide when it goes stale.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The key this entry is stored under
    pub key: String,
    /// The cached payload
    pub value: Value,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Time-to-live in milliseconds
    pub ttl_ms: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now_ms`.
    ///
    /// # Arguments
    /// * `key` - The cache key
    /// * `value` - The payload to store
    /// * `now_ms` - Insertion time in Unix milliseconds
    /// * `ttl_ms` - Time-to-live in milliseconds
    pub fn new(key: impl Into<String>, value: Value, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            key: key.into(),
            value,
            stored_at: now_ms,
            ttl_ms,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// Boundary condition: an entry is still live when its age equals the
    /// TTL exactly and expires one millisecond later.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.age_ms(now_ms) > self.ttl_ms
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("k", json!({"v": 1}), 1_000, 500);

        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, json!({"v": 1}));
        assert_eq!(entry.stored_at, 1_000);
        assert_eq!(entry.ttl_ms, 500);
        assert!(!entry.is_expired(1_000));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("k", json!(null), 1_000, 1_000);

        assert!(!entry.is_expired(2_000), "age == ttl is still live");
        assert!(entry.is_expired(2_001), "age > ttl is expired");
    }

    #[test]
    fn test_zero_ttl_expires_after_one_ms() {
        let entry = CacheEntry::new("k", json!(1), 10, 0);

        assert!(!entry.is_expired(10));
        assert!(entry.is_expired(11));
    }

    #[test]
    fn test_age_with_clock_behind_insertion() {
        let entry = CacheEntry::new("k", json!(1), 5_000, 100);

        assert_eq!(entry.age_ms(4_000), 0);
        assert!(!entry.is_expired(4_000));
    }
}
