//! Cache Statistics Module
//!
//! Tracks read outcomes and builds point-in-time statistics snapshots.

use serde::Serialize;

// == Counters ==
/// Monotonic counters updated by cache operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Reads that returned a live entry
    pub hits: u64,
    /// Reads that found nothing or an expired entry
    pub misses: u64,
    /// Entries dropped to make room for an insert
    pub evictions: u64,
}

impl Counters {
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing has been read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Cache Stats ==
/// Snapshot of the cache returned by `ResponseCache::stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Live entries after the sweep
    pub size: usize,
    /// Capacity of the cache
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub hit_rate: f64,
    /// Age in ms of the least recently stored entry
    pub oldest_item: Option<u64>,
    /// Age in ms of the most recently stored entry
    pub newest_item: Option<u64>,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from counters and the ages of the live entries.
    pub fn new(size: usize, max_size: usize, counters: Counters, ages: &[u64]) -> Self {
        Self {
            size,
            max_size,
            hits: counters.hits,
            misses: counters.misses,
            evictions: counters.evictions,
            hit_rate: counters.hit_rate(),
            oldest_item: ages.iter().copied().max(),
            newest_item: ages.iter().copied().min(),
        }
    }
}
