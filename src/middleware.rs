//! Response Cache Middleware
//!
//! Serves repeated GET requests from the response cache and stores the first
//! successful JSON response for each path + query combination.

use axum::{
    body::{to_bytes, Body, HttpBody},
    extract::{Query, Request, State},
    http::{
        header::{HeaderName, CONTENT_TYPE},
        HeaderMap, HeaderValue, Method, Uri,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{generate_cache_key, CacheOptions, SharedCache};
use crate::error::CacheError;

/// Response header reporting `HIT` or `MISS`.
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Largest handler body the middleware will buffer for caching (1 MB)
pub const MAX_CAPTURE_BYTES: u64 = 1024 * 1024;

// == Layer State ==
/// State handed to `cache_response` by `from_fn_with_state`.
#[derive(Clone)]
pub struct CacheLayerState {
    pub cache: SharedCache,
    pub options: CacheOptions,
}

// == With Cache ==
/// Wraps every route of `router` with the response cache.
///
/// # Example
/// ```ignore
/// let app = with_cache(
///     Router::new().route("/api/content/:topic", get(content_handler)),
///     cache.clone(),
///     CacheOptions::default(),
/// );
/// ```
pub fn with_cache<S>(router: Router<S>, cache: SharedCache, options: CacheOptions) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(
        CacheLayerState { cache, options },
        cache_response,
    ))
}

/// Derives the cache key for a request from its path and query parameters.
///
/// Returns `None` when the query string cannot be parsed.
pub fn request_cache_key(uri: &Uri) -> Option<String> {
    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    Some(generate_cache_key(uri.path(), params))
}

// == Middleware ==
/// Axum middleware implementing the cache lookup and capture.
///
/// Non-GET requests and disabled caching go straight to the handler. On a
/// hit the handler is skipped. On a miss the handler's body is captured and
/// stored when the status is 2xx, the content type is JSON and the body has
/// a known length within `MAX_CAPTURE_BYTES`. Anything else, including
/// streaming bodies, passes through untouched.
pub async fn cache_response(
    State(state): State<CacheLayerState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.options.use_cache || request.method() != Method::GET {
        return next.run(request).await;
    }

    let Some(key) = request_cache_key(request.uri()) else {
        return next.run(request).await;
    };

    if let Some(cached) = state.cache.write().await.get(&key) {
        let mut response = Json(cached).into_response();
        response
            .headers_mut()
            .insert(X_CACHE, HeaderValue::from_static("HIT"));
        return response;
    }

    let response = next.run(request).await;
    if !response.status().is_success() || !is_json(response.headers()) {
        return response;
    }

    match response.body().size_hint().exact() {
        Some(len) if len <= MAX_CAPTURE_BYTES => {}
        _ => {
            debug!(key = %key, "response body unsized or too large, not cached");
            return response;
        }
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_CAPTURE_BYTES as usize).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "failed to read handler response");
            return CacheError::Internal("failed to read response body".to_string())
                .into_response();
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(payload) => {
            let mut cache = state.cache.write().await;
            let ttl_ms = state
                .options
                .ttl_ms
                .unwrap_or_else(|| cache.default_ttl_ms());
            cache.set_with_ttl(key.clone(), payload, ttl_ms);
            debug!(key = %key, ttl_ms, "stored handler response");
            parts.headers.insert(X_CACHE, HeaderValue::from_static("MISS"));
        }
        Err(_) => debug!(key = %key, "response is not JSON, not cached"),
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
