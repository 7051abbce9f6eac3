//! Tenant endpoints.

use crate::gateway::OperationDescriptor;
use serde_json::Value;
use std::time::Duration;

const LIST_TTL: Duration = Duration::from_secs(60);

pub fn list(page: u32, page_size: u32) -> OperationDescriptor {
    OperationDescriptor::get(format!("/tenants?page={page}&pageSize={page_size}"))
        .with_cache_ttl(LIST_TTL)
}

pub fn get(id: u64) -> OperationDescriptor {
    OperationDescriptor::get(format!("/tenants/{id}")).with_cache_ttl(LIST_TTL)
}

pub fn create(body: Value) -> OperationDescriptor {
    OperationDescriptor::post("/tenants")
        .with_body(body)
        .invalidates("tenants")
}

pub fn update(id: u64, body: Value) -> OperationDescriptor {
    OperationDescriptor::patch(format!("/tenants/{id}"))
        .with_body(body)
        .invalidates("tenants")
}

/// Assigning a tenant to a unit touches both sides of the relation.
pub fn assign_to_unit(tenant_id: u64, unit_id: u64) -> OperationDescriptor {
    OperationDescriptor::post(format!("/tenants/{tenant_id}/assign"))
        .with_body(serde_json::json!({ "unitId": unit_id }))
        .invalidates("tenants")
        .invalidates("units")
}

pub fn delete(id: u64) -> OperationDescriptor {
    OperationDescriptor::delete(format!("/tenants/{id}"))
        .invalidates("tenants")
        .invalidates("units")
}
