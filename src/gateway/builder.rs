use crate::auth::SessionToken;
use crate::cache::CacheStore;
use crate::config::{Environment, GatewayConfig};
use crate::gateway::core::Gateway;
use crate::transport::HttpExecutor;
use crate::Result;
use std::time::Duration;

/// Builder for creating gateways with custom configuration.
///
/// Keep this surface area small and predictable. Tests point `base_url`
/// at a mock server and inject an isolated [`CacheStore`].
pub struct GatewayBuilder {
    config: Option<GatewayConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    verbose: Option<bool>,
    token: SessionToken,
    cache: CacheStore,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            base_url: None,
            timeout: None,
            verbose: None,
            token: SessionToken::new(),
            cache: CacheStore::new(),
        }
    }

    /// Start from a full config instead of the ambient environment.
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seed the config from a named environment.
    pub fn environment(mut self, env: Environment) -> Self {
        self.config = Some(env.config());
        self
    }

    /// Override the base URL (primarily for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the process-wide request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Share the session's token handle with the gateway.
    pub fn session_token(mut self, token: SessionToken) -> Self {
        self.token = token;
        self
    }

    /// Inject a cache store. Defaults to a fresh, empty one.
    pub fn cache_store(mut self, cache: CacheStore) -> Self {
        self.cache = cache;
        self
    }

    pub fn build(self) -> Result<Gateway> {
        let mut config = match (self.config, &self.base_url) {
            (Some(config), _) => config,
            (None, Some(url)) => GatewayConfig::new(url.clone()),
            (None, None) => Environment::from_env().config(),
        };
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(verbose) = self.verbose {
            config.verbose = verbose;
        }

        let executor = HttpExecutor::new(&config)?;
        Ok(Gateway {
            config,
            executor,
            cache: self.cache,
            token: self.token,
        })
    }
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
