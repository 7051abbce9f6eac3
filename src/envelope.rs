//! Response envelope classification and normalization.
//!
//! The backend answers in at least three documented shapes for the same
//! logical operation:
//!
//! 1. `{ "success": bool, "data": T, "message"? }`
//! 2. `{ "data": T }`, where `T` may itself be another `{ "data": ... }`
//!    wrapper (double-wrapped)
//! 3. a bare `T` with no envelope at all
//!
//! Rather than probing properties ad hoc at every consumer, the decoded
//! payload is classified once into a tagged [`Envelope`] and normalized by
//! exhaustive match. The ordered fallback is a deliberate heuristic for
//! backend inconsistency; it is not reversible (the envelope shape cannot
//! be reconstructed from the result), which is fine because callers only
//! ever want the payload.
//!
//! Normalization is pure and O(payload size); it never blocks on I/O.

use serde_json::Value;

/// A decoded payload, tagged by which envelope shape the server used.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{ success, ... }`, the status-flag envelope.
    Enveloped(serde_json::Map<String, Value>),
    /// `{ data, ... }` without a `success` flag.
    Wrapped(serde_json::Map<String, Value>),
    /// No envelope at all.
    Bare(Value),
}

/// Classify a decoded payload by probing field presence exactly once.
pub fn classify(payload: Value) -> Envelope {
    match payload {
        Value::Object(map) if map.contains_key("success") => Envelope::Enveloped(map),
        Value::Object(map) if map.contains_key("data") => Envelope::Wrapped(map),
        other => Envelope::Bare(other),
    }
}

/// Reduce a raw decoded payload to the useful payload.
///
/// Applies, in order: a `success` envelope yields its `data` (or the raw
/// payload when `data` is absent); a `data` wrapper yields `data.data` when
/// double-wrapped, else `data`; anything else passes through unchanged.
pub fn normalize(payload: Value) -> Value {
    match classify(payload) {
        Envelope::Enveloped(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        Envelope::Wrapped(mut map) => match map.remove("data") {
            Some(data) => unwrap_inner(data),
            None => Value::Object(map),
        },
        Envelope::Bare(value) => value,
    }
}

/// Peel exactly one inner `{ data }` layer, if present.
fn unwrap_inner(data: Value) -> Value {
    match data {
        Value::Object(mut inner) if inner.contains_key("data") => match inner.remove("data") {
            Some(d) => d,
            None => Value::Object(inner),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_documented_shapes_normalize_to_the_payload() {
        let payload = json!({"id": 42, "name": "Elm Street"});

        assert_eq!(
            normalize(json!({"success": true, "data": payload.clone()})),
            payload
        );
        assert_eq!(normalize(json!({"data": payload.clone()})), payload);
        assert_eq!(
            normalize(json!({"data": {"data": payload.clone()}})),
            payload
        );
        assert_eq!(normalize(payload.clone()), payload);
    }

    #[test]
    fn success_envelope_without_data_passes_raw_payload_through() {
        let raw = json!({"success": true, "message": "deleted"});
        assert_eq!(normalize(raw.clone()), raw);
    }

    #[test]
    fn success_flag_wins_over_data_probing() {
        // `success` present means the data field is taken as-is, even when
        // it looks double-wrapped.
        let out = normalize(json!({"success": false, "data": {"data": 1}}));
        assert_eq!(out, json!({"data": 1}));
    }

    #[test]
    fn double_unwrap_stops_after_one_inner_layer() {
        let out = normalize(json!({"data": {"data": {"data": 7}}}));
        assert_eq!(out, json!({"data": 7}));
    }

    #[test]
    fn bare_scalars_arrays_and_null_pass_through() {
        assert_eq!(normalize(json!(3)), json!(3));
        assert_eq!(normalize(json!([1, 2])), json!([1, 2]));
        assert_eq!(normalize(Value::Null), Value::Null);
    }

    #[test]
    fn classification_is_a_tagged_union() {
        assert!(matches!(
            classify(json!({"success": true, "data": 1})),
            Envelope::Enveloped(_)
        ));
        assert!(matches!(classify(json!({"data": 1})), Envelope::Wrapped(_)));
        assert!(matches!(classify(json!({"id": 1})), Envelope::Bare(_)));
        assert!(matches!(classify(json!("plain")), Envelope::Bare(_)));
    }
}
