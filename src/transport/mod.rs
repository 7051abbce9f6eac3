//! HTTP request execution.
//!
//! One network call per invocation, with a process-wide wall-clock deadline
//! and bearer-token attachment. The executor knows nothing about caching;
//! it yields a raw decoded payload or a classified error.

mod http;

pub use http::HttpExecutor;
