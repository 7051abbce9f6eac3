//! # propgate
//!
//! 这是 PropGate 物业管理应用的客户端请求/缓存网关，所有界面的网络调用都经由它统一处理。
//!
//! Client-side request/cache gateway for the PropGate property-management
//! API. Every screen of the mobile client funnels its network calls through
//! a single [`Gateway`], which executes HTTP requests with bounded timeouts,
//! transparently caches idempotent reads with per-endpoint TTLs, normalizes
//! the backend's heterogeneous response envelopes into one canonical shape,
//! and classifies failures into a small set of actionable kinds.
//!
//! ## Core Philosophy
//!
//! - **One choke point**: hundreds of call sites, one component that knows
//!   about caching, timeouts, auth headers, and backend inconsistency
//! - **Failures as data**: [`Gateway::execute`] returns a [`Result`]; callers
//!   decide whether to retry, show a message, or fall back
//! - **No hidden staleness policy**: a cache hit may be up to its TTL old,
//!   and a failed refresh fails; the gateway never silently serves stale
//!   data on error
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use propgate::{GatewayBuilder, SessionToken};
//! use propgate::ops::properties;
//!
//! #[tokio::main]
//! async fn main() -> propgate::Result<()> {
//!     let token = SessionToken::new();
//!     token.set("eyJhbGciOi...");
//!
//!     let gateway = GatewayBuilder::new()
//!         .base_url("https://api.propgate.example")
//!         .session_token(token)
//!         .build()?;
//!
//!     // Cached for 60s; a second call within the window is served locally.
//!     let page = gateway.execute(&properties::list(1, 10)).await?;
//!     println!("{page}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`gateway`] | Orchestrator: cache lookup, execution, normalization, invalidation |
//! | [`cache`] | In-memory TTL cache store and key derivation |
//! | [`transport`] | HTTP request executor with deadline enforcement |
//! | [`envelope`] | Response envelope classification and normalization |
//! | [`ops`] | Operation descriptors for the property-management endpoints |
//! | [`config`] | Environment selection and gateway configuration |
//! | [`auth`] | Session-owned bearer token handle |

pub mod auth;
pub mod cache;
pub mod config;
pub mod envelope;
pub mod gateway;
pub mod ops;
pub mod transport;

// Re-export main types for convenience
pub use auth::SessionToken;
pub use cache::{CacheKey, CacheStats, CacheStore};
pub use config::{Environment, GatewayConfig};
pub use envelope::normalize;
pub use gateway::{Gateway, GatewayBuilder, Method, OperationDescriptor};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorKind};
