//! API Routes
//!
//! Configures the Axum router with the content and cache endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::content::{content_handler, generate_handler, list_topics_handler};
use super::handlers::{
    health_handler, invalidate_handler, remove_key_handler, stats_handler, AppState,
};
use crate::middleware::with_cache;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/content` - List fallback topics (cached)
/// - `GET /api/content/:topic` - Content for a topic (cached)
/// - `POST /api/content/generate` - Generate content (never cached)
/// - `GET /api/cache/stats` - Cache statistics
/// - `DELETE /api/cache?pattern=` - Invalidate matching entries
/// - `DELETE /api/cache/entry?key=` - Remove one entry
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Response cache on the content routes
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let content = with_cache(
        Router::new()
            .route("/api/content", get(list_topics_handler))
            .route("/api/content/:topic", get(content_handler))
            .route("/api/content/generate", post(generate_handler)),
        state.cache.clone(),
        state.cache_options,
    );

    Router::new()
        .merge(content)
        .route("/api/cache", delete(invalidate_handler))
        .route("/api/cache/entry", delete(remove_key_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResponseCache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(ResponseCache::new(100, 300_000)))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/cache/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_content_not_found() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/content/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/content/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"topic":"seo"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
