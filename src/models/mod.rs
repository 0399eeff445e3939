//! Request and Response models for the content server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{GenerateRequest, InvalidateQuery, RemoveKeyQuery};
pub use responses::{ContentResponse, HealthResponse, RemovedResponse, TopicsResponse};
