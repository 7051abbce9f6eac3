//! Session-owned bearer token handle.
//!
//! The gateway reads the token per-request but does not own its lifecycle:
//! acquisition, refresh, and expiry live in the enclosing session. The
//! session and the gateway hold clones of the same [`SessionToken`], so a
//! refresh is visible to every in-flight and future request without
//! rebuilding the gateway.

use std::sync::{Arc, RwLock};

/// Cloneable handle to the session's current bearer token.
#[derive(Clone, Default)]
pub struct SessionToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SessionToken {
    /// A handle with no token set (requests go out unauthenticated).
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let handle = Self::new();
        handle.set(token);
        handle
    }

    /// Replace the current token.
    pub fn set(&self, token: impl Into<String>) {
        *self.inner.write().unwrap() = Some(token.into());
    }

    /// Drop the current token (e.g. on logout).
    pub fn clear(&self) {
        *self.inner.write().unwrap() = None;
    }

    /// Snapshot of the current token, if any.
    pub fn get(&self) -> Option<String> {
        self.inner.read().unwrap().clone()
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never leak the token into logs.
        let state = if self.get().is_some() { "set" } else { "unset" };
        f.debug_struct("SessionToken").field("token", &state).finish()
    }
}
