//! API Handlers
//!
//! HTTP handlers for cache administration and health.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use crate::cache::{shared, CacheOptions, CacheStats, ResponseCache, SharedCache, WILDCARD};
use crate::config::Config;
use crate::models::{HealthResponse, InvalidateQuery, RemoveKeyQuery, RemovedResponse};

/// Application state shared across all handlers.
///
/// Contains the cache wrapped in Arc<RwLock<>> for shared access and the
/// options the response middleware runs with.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: SharedCache,
    /// Options for the cached content routes
    pub cache_options: CacheOptions,
}

impl AppState {
    /// Creates a new AppState with the given cache and default options.
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            cache: shared(cache),
            cache_options: CacheOptions::default(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = ResponseCache::new(config.max_size, config.default_ttl_ms);
        Self {
            cache: shared(cache),
            cache_options: CacheOptions {
                use_cache: config.cache_enabled,
                ttl_ms: None,
            },
        }
    }
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    // Write lock: stats sweeps expired entries first
    let mut cache = state.cache.write().await;
    Json(cache.stats())
}

/// Handler for DELETE /api/cache?pattern=...
///
/// Without a pattern every entry is removed.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Query(query): Query<InvalidateQuery>,
) -> Json<RemovedResponse> {
    let pattern = query.pattern.unwrap_or_else(|| WILDCARD.to_string());
    let removed = state.cache.write().await.invalidate(&pattern);
    info!(pattern = %pattern, removed, "cache invalidated");

    Json(RemovedResponse::new(removed))
}

/// Handler for DELETE /api/cache/entry?key=...
pub async fn remove_key_handler(
    State(state): State<AppState>,
    Query(query): Query<RemoveKeyQuery>,
) -> Json<RemovedResponse> {
    let removed = state.cache.write().await.remove(&query.key);

    Json(RemovedResponse::new(usize::from(removed)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
