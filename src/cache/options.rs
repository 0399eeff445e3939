//! Cache Options Module
//!
//! Per-call switches shared by `cached_fetch` and the response middleware.

// == Cache Options ==
/// Controls whether a call uses the cache and for how long results live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// `false` skips both reading and writing the cache
    pub use_cache: bool,
    /// TTL for stored results, `None` uses the cache's default TTL
    pub ttl_ms: Option<u64>,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            ttl_ms: None,
        }
    }
}

impl CacheOptions {
    /// Options that bypass the cache entirely.
    pub fn bypass() -> Self {
        Self {
            use_cache: false,
            ttl_ms: None,
        }
    }

    /// Options that cache results for `ttl_ms` milliseconds.
    pub fn with_ttl(ttl_ms: u64) -> Self {
        Self {
            use_cache: true,
            ttl_ms: Some(ttl_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_cache() {
        let options = CacheOptions::default();
        assert!(options.use_cache);
        assert_eq!(options.ttl_ms, None);
    }

    #[test]
    fn test_bypass_and_ttl() {
        assert!(!CacheOptions::bypass().use_cache);
        assert_eq!(CacheOptions::with_ttl(1_000).ttl_ms, Some(1_000));
    }
}
