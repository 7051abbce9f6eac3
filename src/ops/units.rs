//! Unit endpoints.
//!
//! Units hang off properties, and property detail screens embed unit
//! counts, so unit mutations invalidate both collections.

use crate::gateway::OperationDescriptor;
use serde_json::Value;
use std::time::Duration;

const LIST_TTL: Duration = Duration::from_secs(60);

pub fn list_for_property(property_id: u64) -> OperationDescriptor {
    OperationDescriptor::get(format!("/properties/{property_id}/units")).with_cache_ttl(LIST_TTL)
}

pub fn get(id: u64) -> OperationDescriptor {
    OperationDescriptor::get(format!("/units/{id}")).with_cache_ttl(LIST_TTL)
}

pub fn create(property_id: u64, body: Value) -> OperationDescriptor {
    OperationDescriptor::post(format!("/properties/{property_id}/units"))
        .with_body(body)
        .invalidates("units")
        .invalidates("properties")
}

pub fn update(id: u64, body: Value) -> OperationDescriptor {
    OperationDescriptor::patch(format!("/units/{id}"))
        .with_body(body)
        .invalidates("units")
        .invalidates("properties")
}

pub fn delete(id: u64) -> OperationDescriptor {
    OperationDescriptor::delete(format!("/units/{id}"))
        .invalidates("units")
        .invalidates("properties")
}
