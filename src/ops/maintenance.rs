//! Maintenance request endpoints.

use crate::gateway::OperationDescriptor;
use serde_json::Value;
use std::time::Duration;

// Work orders move fast; keep staleness tight.
const LIST_TTL: Duration = Duration::from_secs(30);

pub fn list(page: u32, page_size: u32) -> OperationDescriptor {
    OperationDescriptor::get(format!("/maintenance?page={page}&pageSize={page_size}"))
        .with_cache_ttl(LIST_TTL)
}

pub fn get(id: u64) -> OperationDescriptor {
    OperationDescriptor::get(format!("/maintenance/{id}")).with_cache_ttl(LIST_TTL)
}

pub fn create(body: Value) -> OperationDescriptor {
    OperationDescriptor::post("/maintenance")
        .with_body(body)
        .invalidates("maintenance")
}

pub fn update_status(id: u64, status: &str) -> OperationDescriptor {
    OperationDescriptor::patch(format!("/maintenance/{id}/status"))
        .with_body(serde_json::json!({ "status": status }))
        .invalidates("maintenance")
}

pub fn delete(id: u64) -> OperationDescriptor {
    OperationDescriptor::delete(format!("/maintenance/{id}")).invalidates("maintenance")
}
