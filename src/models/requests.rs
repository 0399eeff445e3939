//! Request DTOs for the content and cache administration API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Longest topic accepted by the generate endpoint
pub const MAX_TOPIC_LENGTH: usize = 128;

/// Request body for POST /api/content/generate
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Topic to write about
    pub topic: String,
    /// Optional writing tone, e.g. "friendly"
    #[serde(default)]
    pub tone: Option<String>,
}

impl GenerateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Some("Topic cannot be empty".to_string());
        }
        if topic.len() > MAX_TOPIC_LENGTH {
            return Some(format!(
                "Topic exceeds maximum length of {} characters",
                MAX_TOPIC_LENGTH
            ));
        }
        None
    }
}

/// Query string for DELETE /api/cache
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvalidateQuery {
    /// Substring to match, `*` or absent clears everything
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Query string for DELETE /api/cache/entry
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveKeyQuery {
    /// Exact cache key to remove
    pub key: String,
}
