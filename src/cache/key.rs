//! Cache key derivation.

use serde::{Deserialize, Serialize};

/// Deterministic identifier for a cacheable request.
///
/// Derived from the HTTP method, the endpoint path (including query), and
/// the serialized request body. Two logically identical requests produce
/// the same key; any difference in method, path, or body produces a
/// different one. The key stays human-readable so that substring
/// invalidation (`"properties"` clearing both the list and detail entries)
/// has something meaningful to match against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    key: String,
}

impl CacheKey {
    /// Derive a key from the request triple.
    ///
    /// The body is serialized through `serde_json`, whose object maps are
    /// ordered, so field order at the call site cannot split the key space.
    pub fn derive(method: &str, endpoint: &str, body: Option<&serde_json::Value>) -> Self {
        let body_part = body.map(|b| b.to_string()).unwrap_or_default();
        Self {
            key: format!("{}:{}:{}", method.to_uppercase(), endpoint, body_part),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self { key: s.to_string() }
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        Self { key: s }
    }
}
