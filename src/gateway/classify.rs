//! Failure classification logic.
//!
//! Maps transport-level failures and non-2xx responses into the small
//! taxonomy callers observe. Connectivity and timeout messages are
//! synthesized by [`crate::Error`] itself; HTTP errors prefer a human
//! message decoded from the server's error body and fall back to a generic
//! `HTTP error <status>` when the body is not usable.

use crate::Error;
use serde_json::Value;

/// Classify a failure raised by the HTTP client.
///
/// The deadline race is handled by the client (the loser is actively
/// cancelled), so an elapsed deadline surfaces here as a timeout error.
pub(crate) fn from_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else if err.is_connect() {
        Error::NetworkUnavailable
    } else if err.is_decode() {
        Error::Decode {
            detail: err.to_string(),
        }
    } else {
        Error::Unknown {
            message: err.to_string(),
        }
    }
}

/// Build an HTTP error from a non-2xx status and its body.
pub(crate) fn from_http_status(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| extract_message(&v))
        .unwrap_or_else(|| format!("HTTP error {status}"));
    Error::Http { status, message }
}

/// Pull a display message out of an error body.
///
/// The backend is no more consistent about error bodies than about success
/// envelopes: `{message}`, `{error}`, and `{error: {message}}` all occur.
fn extract_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .or_else(|| {
            body.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}
