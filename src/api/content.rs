//! Content Handlers
//!
//! Content endpoints answered from built-in fallback copy. GET routes are
//! served through the response cache; generation requests are not.

use axum::{extract::Path, Json};
use chrono::Utc;

use crate::error::{CacheError, Result};
use crate::models::{ContentResponse, GenerateRequest, TopicsResponse};

/// Built-in copy served when no generator is available.
struct Fallback {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    sections: &'static [&'static str],
}

const FALLBACK_CONTENT: &[Fallback] = &[
    Fallback {
        slug: "seo",
        title: "Search Engine Optimization Basics",
        summary: "How search engines find, read and rank your pages.",
        sections: &[
            "Start with pages that answer one question well.",
            "Use descriptive titles and meta descriptions for every page.",
            "Link related pages together so crawlers can follow them.",
        ],
    },
    Fallback {
        slug: "email-marketing",
        title: "Email Marketing That Gets Read",
        summary: "Building a list and sending mail people open.",
        sections: &[
            "Ask for consent and make unsubscribing easy.",
            "Write subject lines that describe the content honestly.",
            "Measure opens and clicks, then adjust send times.",
        ],
    },
    Fallback {
        slug: "social-media",
        title: "Planning Social Media Posts",
        summary: "A weekly rhythm for posting without burning out.",
        sections: &[
            "Pick two networks where your audience already is.",
            "Batch-write posts once a week and schedule them.",
            "Reply to comments within a day.",
        ],
    },
];

fn lookup(topic: &str) -> Option<&'static Fallback> {
    FALLBACK_CONTENT.iter().find(|f| f.slug == topic)
}

/// Builds content for `topic`, using fallback copy when the topic is known.
pub fn fallback_content(topic: &str, tone: Option<&str>) -> ContentResponse {
    let topic = topic.trim().to_lowercase();
    let generated_at = Utc::now().to_rfc3339();

    let mut content = match lookup(&topic) {
        Some(fallback) => ContentResponse {
            topic: fallback.slug.to_string(),
            title: fallback.title.to_string(),
            summary: fallback.summary.to_string(),
            sections: fallback.sections.iter().map(|s| s.to_string()).collect(),
            generated_at,
        },
        None => ContentResponse {
            title: format!("An Introduction to {}", topic),
            summary: format!("Key ideas about {} for small teams.", topic),
            sections: vec![
                format!("What {} is and who it is for.", topic),
                format!("Common mistakes when getting started with {}.", topic),
                format!("A short checklist for your first week of {}.", topic),
            ],
            topic,
            generated_at,
        },
    };

    if let Some(tone) = tone.map(str::trim).filter(|t| !t.is_empty()) {
        content.summary = format!("{} (tone: {})", content.summary, tone);
    }

    content
}

/// Handler for GET /api/content
pub async fn list_topics_handler() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: FALLBACK_CONTENT
            .iter()
            .map(|f| f.slug.to_string())
            .collect(),
    })
}

/// Handler for GET /api/content/:topic
pub async fn content_handler(Path(topic): Path<String>) -> Result<Json<ContentResponse>> {
    if lookup(&topic.to_lowercase()).is_none() {
        return Err(CacheError::NotFound(format!("topic '{}'", topic)));
    }

    Ok(Json(fallback_content(&topic, None)))
}

/// Handler for POST /api/content/generate
pub async fn generate_handler(Json(req): Json<GenerateRequest>) -> Result<Json<ContentResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    Ok(Json(fallback_content(&req.topic, req.tone.as_deref())))
}
