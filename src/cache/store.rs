//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO tracking and TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::cache::{
    CacheEntry, CacheStats, Clock, Counters, FifoTracker, SystemClock, DEFAULT_MAX_SIZE,
    DEFAULT_TTL_MS,
};

/// Pattern that matches every key in `ResponseCache::invalidate`.
pub const WILDCARD: &str = "*";

// == Response Cache ==
/// Bounded in-memory response cache with per-entry TTL.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order used for eviction
    fifo: FifoTracker,
    /// Hit, miss and eviction counters
    counters: Counters,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL in milliseconds for writes without an explicit TTL
    default_ttl_ms: u64,
    clock: Arc<dyn Clock>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE, DEFAULT_TTL_MS)
    }
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a cache on the system clock.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, clamped to at least 1
    /// * `default_ttl_ms` - TTL in milliseconds for `set` without an explicit TTL
    pub fn new(max_size: usize, default_ttl_ms: u64) -> Self {
        Self::with_clock(max_size, default_ttl_ms, Arc::new(SystemClock))
    }

    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            fifo: FifoTracker::new(),
            counters: Counters::default(),
            max_size: max_size.max(1),
            default_ttl_ms,
            clock,
        }
    }

    // == Get ==
    /// Returns the live value stored under `key`.
    ///
    /// An expired entry is removed by this call and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.counters.record_miss();
                debug!(key, "cache miss");
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.counters.record_miss();
            debug!(key, "cache miss (expired)");
            return None;
        }

        self.counters.record_hit();
        debug!(key, "cache hit");
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key` with the default TTL.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let ttl = self.default_ttl_ms;
        self.set_with_ttl(key, value, ttl);
    }

    /// Stores `value` under `key`, replacing any existing entry.
    ///
    /// Expired entries are swept first. If the cache is still full, the
    /// oldest inserted entry is evicted, even when `key` is already present.
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: Value, ttl_ms: u64) {
        let key = key.into();

        self.cleanup();

        if self.entries.len() >= self.max_size {
            if let Some(evicted) = self.fifo.evict_oldest() {
                self.entries.remove(&evicted);
                self.counters.record_eviction();
                debug!(key = %evicted, "evicted oldest entry");
            }
        }

        let entry = CacheEntry::new(key.clone(), value, self.clock.now_ms(), ttl_ms);
        self.entries.insert(key.clone(), entry);
        self.fifo.insert(&key);
    }

    // == Remove ==
    /// Removes the entry under `key`. Returns whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.remove_entry(key)
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.fifo.clear();
    }

    // == Invalidate ==
    /// Removes every entry whose key contains `pattern`, or all entries for `"*"`.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate(&mut self, pattern: &str) -> usize {
        if pattern == WILDCARD {
            let count = self.entries.len();
            self.clear();
            return count;
        }

        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.contains(pattern))
            .cloned()
            .collect();

        for key in &matching {
            self.remove_entry(key);
        }

        matching.len()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .values()
            .filter(|entry| entry.is_expired(now))
            .map(|entry| entry.key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        expired_keys.len()
    }

    // == Stats ==
    /// Sweeps expired entries, then returns a statistics snapshot.
    pub fn stats(&mut self) -> CacheStats {
        self.cleanup();

        let now = self.clock.now_ms();
        let ages: Vec<u64> = self.entries.values().map(|e| e.age_ms(now)).collect();

        CacheStats::new(self.entries.len(), self.max_size, self.counters, &ages)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    /// Checks storage directly, without expiry checks or counter updates.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.fifo.remove(key);
            true
        } else {
            false
        }
    }
}
