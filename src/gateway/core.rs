use crate::auth::SessionToken;
use crate::cache::{CacheStats, CacheStore};
use crate::config::GatewayConfig;
use crate::envelope;
use crate::transport::HttpExecutor;
use crate::Result;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::debug;

/// The request/cache gateway every screen funnels through.
///
/// Owns its [`CacheStore`] (dependency-injected at build time, never a
/// process-global), shares a [`SessionToken`] handle with the enclosing
/// session, and drives the executor → normalizer pipeline for every call.
/// Each [`execute`](Self::execute) is an independent async unit; the cache
/// and the token handle are the only state shared across in-flight calls.
pub struct Gateway {
    pub(crate) config: GatewayConfig,
    pub(crate) executor: HttpExecutor,
    pub(crate) cache: CacheStore,
    pub(crate) token: SessionToken,
}

impl Gateway {
    /// Start building a gateway.
    pub fn builder() -> super::GatewayBuilder {
        super::GatewayBuilder::new()
    }

    /// Run one operation to completion.
    ///
    /// Cache-eligible reads are served locally on a hit, skipping the
    /// network entirely; a hit may be up to its TTL old, and strong
    /// consistency is explicitly not guaranteed. On a miss the call goes
    /// out, the response is normalized, and the result is written back
    /// before being returned. Mutations never touch the cache read path
    /// and never self-write; after they succeed, the descriptor's
    /// invalidation patterns are cleared.
    ///
    /// Failures surface once, classified; there is no retry and no
    /// fallback to stale cache data. Identical concurrent calls are not
    /// coalesced: each queries the network and the last writer wins.
    pub async fn execute(&self, descriptor: &super::OperationDescriptor) -> Result<serde_json::Value> {
        let cache_eligible = descriptor.is_cache_eligible();
        let key = descriptor.cache_key();

        if cache_eligible {
            if let Some(value) = self.cache.get(&key) {
                debug!(cache_key = %key, "cache hit");
                return Ok(value);
            }
            debug!(cache_key = %key, "cache miss");
        }

        let start = Instant::now();
        let token = self.token.get();
        let raw = self.executor.execute(descriptor, token.as_deref()).await?;
        let value = envelope::normalize(raw);

        if cache_eligible {
            self.cache.set(&key, value.clone(), descriptor.cache_ttl);
        } else if descriptor.method.is_mutating() {
            for pattern in &descriptor.invalidates {
                let removed = self.cache.invalidate(pattern);
                debug!(pattern = pattern.as_str(), removed, "invalidated after mutation");
            }
        }

        if self.config.verbose {
            debug!(
                method = descriptor.method.as_str(),
                endpoint = descriptor.endpoint.as_str(),
                duration_ms = start.elapsed().as_millis() as u64,
                "operation done"
            );
        }

        Ok(value)
    }

    /// Run one operation and deserialize the normalized payload.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        descriptor: &super::OperationDescriptor,
    ) -> Result<T> {
        let value = self.execute(descriptor).await?;
        serde_json::from_value(value).map_err(|e| crate::Error::Decode {
            detail: format!("{e} (endpoint {})", descriptor.endpoint),
        })
    }

    /// Clear cached entries matching `pattern`, or everything when `None`.
    pub fn clear_cache(&self, pattern: Option<&str>) {
        match pattern {
            Some(p) => {
                let removed = self.cache.invalidate(p);
                debug!(pattern = p, removed, "cache cleared by pattern");
            }
            None => {
                self.cache.clear();
                debug!("cache cleared");
            }
        }
    }

    /// Snapshot of cache activity counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Evict expired cache entries. Optional hygiene; correctness never
    /// depends on it because expired entries are refused at read time.
    pub fn sweep_cache(&self) -> usize {
        self.cache.sweep()
    }

    /// The session token handle this gateway reads per-request.
    pub fn session_token(&self) -> &SessionToken {
        &self.token
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
