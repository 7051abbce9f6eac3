//! Property endpoints.

use crate::gateway::OperationDescriptor;
use serde_json::Value;
use std::time::Duration;

const LIST_TTL: Duration = Duration::from_secs(60);
const DETAIL_TTL: Duration = Duration::from_secs(120);

/// Paged property listing.
pub fn list(page: u32, page_size: u32) -> OperationDescriptor {
    OperationDescriptor::get(format!("/properties?page={page}&pageSize={page_size}"))
        .with_cache_ttl(LIST_TTL)
}

/// One property by id.
pub fn get(id: u64) -> OperationDescriptor {
    OperationDescriptor::get(format!("/properties/{id}")).with_cache_ttl(DETAIL_TTL)
}

pub fn create(body: Value) -> OperationDescriptor {
    OperationDescriptor::post("/properties")
        .with_body(body)
        .invalidates("properties")
}

pub fn update(id: u64, body: Value) -> OperationDescriptor {
    OperationDescriptor::patch(format!("/properties/{id}"))
        .with_body(body)
        .invalidates("properties")
}

pub fn delete(id: u64) -> OperationDescriptor {
    OperationDescriptor::delete(format!("/properties/{id}")).invalidates("properties")
}
