//! API Module
//!
//! HTTP handlers and routing for the content server.
//!
//! # Endpoints
//! - `GET /api/content` - List fallback topics
//! - `GET /api/content/:topic` - Content for a topic
//! - `POST /api/content/generate` - Generate content for any topic
//! - `GET /api/cache/stats` - Cache statistics
//! - `DELETE /api/cache` - Invalidate cached responses
//! - `DELETE /api/cache/entry` - Remove one cached response
//! - `GET /health` - Health check endpoint

pub mod content;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
