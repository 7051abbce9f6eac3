//! Classified error type for the gateway.
//!
//! Every failure a caller can observe is one of a small fixed set of kinds,
//! decoupled from transport-specific error types. Each variant's `Display`
//! output is suitable for direct on-screen display without further
//! translation; connectivity and timeout messages are synthesized here (not
//! sourced from the server) so the user-facing text stays stable regardless
//! of backend phrasing.

use thiserror::Error;

/// Error kind discriminant, used for logging fields and match-free callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Transport-level failure before any response was received
    NetworkUnavailable,
    /// The configured deadline elapsed before a response arrived
    Timeout,
    /// A non-2xx response was received and decoded
    Http,
    /// The response body was not valid JSON
    Decode,
    /// Anything not matching the above
    Unknown,
}

impl ErrorKind {
    /// Stable lowercase name for structured log fields.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkUnavailable => "network_unavailable",
            Self::Timeout => "timeout",
            Self::Http => "http_error",
            Self::Decode => "decode_error",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the gateway.
///
/// This aggregates all low-level failure conditions into actionable,
/// display-ready categories.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error. Please check your connection.")]
    NetworkUnavailable,

    #[error("Request timeout. Please try again.")]
    Timeout,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Unexpected server response. Please try again.")]
    Decode {
        /// What the decoder actually choked on; logged, never displayed.
        detail: String,
    },

    #[error("{message}")]
    Unknown { message: String },
}

impl Error {
    /// Create an HTTP error with the generic fallback message for `status`.
    pub fn http_status(status: u16) -> Self {
        Error::Http {
            status,
            message: format!("HTTP error {status}"),
        }
    }

    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NetworkUnavailable => ErrorKind::NetworkUnavailable,
            Error::Timeout => ErrorKind::Timeout,
            Error::Http { .. } => ErrorKind::Http,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status code, when one was received.
    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
