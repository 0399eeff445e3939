//! Cached Fetch
//!
//! Wraps an HTTP fetch so repeated requests for the same URL and options are
//! answered from the response cache.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{generate_cache_key, CacheOptions, SharedCache};
use crate::error::{CacheError, Result};

// == Fetch Options ==
/// Request options that identify a fetch alongside its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// HTTP method, e.g. `GET`
    pub method: String,
    /// Request headers
    pub headers: BTreeMap<String, String>,
    /// Optional request body
    pub body: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            headers: BTreeMap::new(),
            body: None,
        }
    }
}

impl FetchOptions {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Derives the cache key for `url` fetched with these options.
    ///
    /// The method (uppercased, as sent), body and every header (as
    /// `header.<name>`) become key parameters.
    pub fn cache_key(&self, url: &str) -> String {
        let mut params = vec![("method".to_string(), self.method.to_uppercase())];
        if let Some(body) = &self.body {
            params.push(("body".to_string(), body.clone()));
        }
        params.extend(
            self.headers
                .iter()
                .map(|(name, value)| (format!("header.{}", name), value.clone())),
        );

        generate_cache_key(url, params)
    }
}

// == Fetcher Trait ==
/// Network capability used by `cached_fetch`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs the request and parses the body as JSON.
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<Value>;
}

// == HTTP Fetcher ==
/// `Fetcher` backed by a reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<Value> {
        let method = Method::from_bytes(options.method.to_uppercase().as_bytes())
            .map_err(|_| CacheError::InvalidRequest(format!("bad method: {}", options.method)))?;

        let mut request = self.client.request(method, url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// == Cached Fetch ==
/// Returns the cached response for `url` + `options`, fetching it on a miss.
///
/// With `cache_options.use_cache == false` the cache is neither read nor
/// written. Failures propagate unchanged and nothing is stored. The cache
/// lock is released while the request is in flight.
pub async fn cached_fetch<F>(
    cache: &SharedCache,
    fetcher: &F,
    url: &str,
    options: &FetchOptions,
    cache_options: CacheOptions,
) -> Result<Value>
where
    F: Fetcher + ?Sized,
{
    if !cache_options.use_cache {
        return fetcher.fetch(url, options).await;
    }

    let key = options.cache_key(url);
    if let Some(cached) = cache.write().await.get(&key) {
        return Ok(cached);
    }

    let data = fetcher.fetch(url, options).await.map_err(|err| {
        warn!(url, error = %err, "fetch failed, nothing cached");
        err
    })?;

    let mut guard = cache.write().await;
    let ttl_ms = cache_options.ttl_ms.unwrap_or_else(|| guard.default_ttl_ms());
    guard.set_with_ttl(key.clone(), data.clone(), ttl_ms);
    debug!(key = %key, ttl_ms, "cached fetch result");

    Ok(data)
}
