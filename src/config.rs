//! Configuration Module
//!
//! Handles loading cache and server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{DEFAULT_CLEANUP_INTERVAL_MS, DEFAULT_MAX_SIZE, DEFAULT_TTL_MS};

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of cached responses
    pub max_size: usize,
    /// Default TTL in milliseconds for cached responses
    pub default_ttl_ms: u64,
    /// Background sweep interval in milliseconds
    pub cleanup_interval_ms: u64,
    /// Whether the middleware serves and stores cached responses
    pub cache_enabled: bool,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cached responses (default: 100)
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CACHE_CLEANUP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 600000)
    /// - `CACHE_ENABLED` - `true`/`false` (default: true)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_size: env_or("CACHE_MAX_SIZE", defaults.max_size),
            default_ttl_ms: env_or("CACHE_DEFAULT_TTL_MS", defaults.default_ttl_ms),
            cleanup_interval_ms: env_or("CACHE_CLEANUP_INTERVAL_MS", defaults.cleanup_interval_ms),
            cache_enabled: env_or("CACHE_ENABLED", defaults.cache_enabled),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            default_ttl_ms: DEFAULT_TTL_MS,
            cleanup_interval_ms: DEFAULT_CLEANUP_INTERVAL_MS,
            cache_enabled: true,
            server_port: 3000,
        }
    }
}

/// Parses `name` from the environment, falling back when unset or invalid.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_size, 100);
        assert_eq!(config.default_ttl_ms, 300_000);
        assert_eq!(config.cleanup_interval_ms, 600_000);
        assert!(config.cache_enabled);
        assert_eq!(config.server_port, 3000);
    }

    // Env vars are process-wide, so each test uses its own variable names.
    #[test]
    fn test_env_or_parses_value() {
        env::set_var("RESPONSE_CACHE_TEST_PARSE", " 42 ");
        assert_eq!(env_or("RESPONSE_CACHE_TEST_PARSE", 7usize), 42);
        env::remove_var("RESPONSE_CACHE_TEST_PARSE");
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("RESPONSE_CACHE_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_or("RESPONSE_CACHE_TEST_GARBAGE", 7u64), 7);
        env::remove_var("RESPONSE_CACHE_TEST_GARBAGE");
    }

    #[test]
    fn test_env_or_unset() {
        env::remove_var("RESPONSE_CACHE_TEST_UNSET");
        assert!(!env_or("RESPONSE_CACHE_TEST_UNSET", false));
    }
}
