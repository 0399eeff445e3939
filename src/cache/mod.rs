//! Cache Module
//!
//! Provides an in-memory response cache with TTL expiration and FIFO eviction.

mod clock;
mod entry;
mod fifo;
mod key;
mod options;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use fifo::FifoTracker;
pub use key::generate_cache_key;
pub use options::CacheOptions;
pub use stats::{CacheStats, Counters};
pub use store::{ResponseCache, WILDCARD};

/// Cache handle shared between handlers, middleware and background tasks.
pub type SharedCache = Arc<RwLock<ResponseCache>>;

/// Wraps a cache for sharing across tasks.
pub fn shared(cache: ResponseCache) -> SharedCache {
    Arc::new(RwLock::new(cache))
}

// == Public Constants ==
/// Default time-to-live for cached entries (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Default maximum number of cached entries
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Default interval between background sweeps (10 minutes)
pub const DEFAULT_CLEANUP_INTERVAL_MS: u64 = 10 * 60 * 1000;
