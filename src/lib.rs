//! Response Cache - An in-process API response cache
//!
//! Bounded TTL cache with FIFO eviction, a cached fetch wrapper and axum
//! middleware that serves repeated GET requests from memory.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod middleware;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{generate_cache_key, CacheOptions, ResponseCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use fetch::{cached_fetch, FetchOptions, Fetcher, HttpFetcher};
pub use middleware::with_cache;
pub use tasks::CleanupTask;
