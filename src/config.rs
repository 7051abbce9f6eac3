//! Environment selection and gateway configuration.
//!
//! The mobile client ships with three backend environments baked in; which
//! one a build talks to is selected at startup (via `PROPGATE_ENV`) and
//! injected into the gateway at construction. The gateway itself has no
//! notion of environments, only of the [`GatewayConfig`] it was handed.

use std::env;
use std::time::Duration;

/// Backend environment a build is pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Resolve from `PROPGATE_ENV` (`dev`/`staging`/`prod`), defaulting to
    /// production for release safety.
    pub fn from_env() -> Self {
        match env::var("PROPGATE_ENV").ok().as_deref() {
            Some("dev") | Some("development") => Self::Development,
            Some("staging") => Self::Staging,
            _ => Self::Production,
        }
    }

    /// Base URL of this environment's API.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Development => "http://localhost:8080/api",
            Self::Staging => "https://staging.api.propgate.example/api",
            Self::Production => "https://api.propgate.example/api",
        }
    }

    /// Whether verbose request/response logging is on for this environment.
    pub fn verbose(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Build a [`GatewayConfig`] for this environment.
    pub fn config(&self) -> GatewayConfig {
        GatewayConfig::new(self.base_url()).with_verbose(self.verbose())
    }
}

/// Configuration for a [`crate::Gateway`] instance.
///
/// The request deadline is process-wide and applied uniformly; it is not
/// configurable per call.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,
    /// Wall-clock deadline per request.
    pub timeout: Duration,
    /// Connection-pool tuning passed through to the HTTP client.
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    /// Emit per-request debug logging.
    pub verbose: bool,
}

impl GatewayConfig {
    /// Minimal production-friendly defaults (env-overridable).
    pub fn new(base_url: impl Into<String>) -> Self {
        let timeout_ms = env::var("PROPGATE_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(15_000);

        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(timeout_ms),
            pool_max_idle_per_host: env::var("PROPGATE_POOL_MAX_IDLE_PER_HOST")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(8),
            pool_idle_timeout: Duration::from_secs(
                env::var("PROPGATE_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            ),
            verbose: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Install a global `tracing` subscriber honoring `RUST_LOG`, with a default
/// level matching the config's verbosity.
///
/// Call once at app startup; later calls are ignored.
pub fn init_logging(config: &GatewayConfig) {
    use tracing_subscriber::EnvFilter;

    let default_directive = if config.verbose { "propgate=debug" } else { "propgate=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_the_default_environment() {
        // Not setting PROPGATE_ENV in the test runner.
        assert_eq!(Environment::from_env(), Environment::Production);
    }

    #[test]
    fn environment_selects_base_url_and_verbosity() {
        let dev = Environment::Development.config();
        assert!(dev.base_url.starts_with("http://localhost"));
        assert!(dev.verbose);

        let prod = Environment::Production.config();
        assert!(prod.base_url.starts_with("https://"));
        assert!(!prod.verbose);
    }

    #[test]
    fn default_timeout_is_fifteen_seconds() {
        let cfg = GatewayConfig::new("https://api.example");
        assert_eq!(cfg.timeout, Duration::from_millis(15_000));
    }
}
