//! Operation descriptors.

use crate::cache::CacheKey;
use std::collections::HashMap;
use std::time::Duration;

/// HTTP methods the gateway issues, split by cache treatment: GET is the
/// side-effect-free kind eligible for caching; everything else mutates and
/// is never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Idempotent, side-effect-free, eligible for caching.
    #[inline]
    pub fn is_cacheable(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// State-changing; bypasses the cache and triggers invalidation.
    #[inline]
    pub fn is_mutating(&self) -> bool {
        !self.is_cacheable()
    }

    pub(crate) fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the gateway needs to run one operation.
///
/// Constructed per call site, immutable once built; its lifetime is one
/// [`crate::Gateway::execute`] invocation. Mutating descriptors carry the
/// cache patterns they invalidate, so the gateway clears related entries
/// itself instead of trusting every call site to remember.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    /// Path plus query, joined onto the configured base URL.
    pub endpoint: String,
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub headers: HashMap<String, String>,
    /// Cache lifetime for GET operations; zero means never cache.
    pub cache_ttl: Duration,
    /// Cache-key substrings cleared after this mutation succeeds.
    pub invalidates: Vec<String>,
}

impl OperationDescriptor {
    fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body: None,
            headers: HashMap::new(),
            cache_ttl: Duration::ZERO,
            invalidates: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Put, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Patch, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn invalidates(mut self, pattern: impl Into<String>) -> Self {
        self.invalidates.push(pattern.into());
        self
    }

    /// Whether the gateway may consult and populate the cache for this
    /// operation.
    pub fn is_cache_eligible(&self) -> bool {
        self.method.is_cacheable() && self.cache_ttl > Duration::ZERO
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::derive(self.method.as_str(), &self.endpoint, self.body.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_get_with_positive_ttl_is_cache_eligible() {
        let get = OperationDescriptor::get("/properties").with_cache_ttl(Duration::from_secs(60));
        assert!(get.is_cache_eligible());

        let get_no_ttl = OperationDescriptor::get("/properties");
        assert!(!get_no_ttl.is_cache_eligible());

        // A TTL on a mutating method never makes it cacheable.
        let post = OperationDescriptor::post("/properties")
            .with_body(json!({}))
            .with_cache_ttl(Duration::from_secs(60));
        assert!(!post.is_cache_eligible());
    }

    #[test]
    fn cache_key_reflects_the_request_triple() {
        let d = OperationDescriptor::get("/properties?page=1");
        assert_eq!(d.cache_key().as_str(), "GET:/properties?page=1:");
    }

    #[test]
    fn invalidation_patterns_accumulate() {
        let d = OperationDescriptor::post("/units")
            .invalidates("units")
            .invalidates("properties");
        assert_eq!(d.invalidates, vec!["units", "properties"]);
    }

    #[test]
    fn caller_headers_replace_same_name() {
        let d = OperationDescriptor::get("/export")
            .with_header("accept", "application/json")
            .with_header("accept", "text/csv");
        assert_eq!(d.headers.get("accept").map(String::as_str), Some("text/csv"));
    }
}
