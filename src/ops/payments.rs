//! Payment endpoints.
//!
//! The payment-provider webview flow lives outside the gateway; these
//! descriptors cover the record-keeping endpoints only.

use crate::gateway::OperationDescriptor;
use serde_json::Value;
use std::time::Duration;

const LIST_TTL: Duration = Duration::from_secs(30);

pub fn list_for_tenant(tenant_id: u64, page: u32, page_size: u32) -> OperationDescriptor {
    OperationDescriptor::get(format!(
        "/tenants/{tenant_id}/payments?page={page}&pageSize={page_size}"
    ))
    .with_cache_ttl(LIST_TTL)
}

pub fn get(id: u64) -> OperationDescriptor {
    OperationDescriptor::get(format!("/payments/{id}")).with_cache_ttl(LIST_TTL)
}

/// Record a manual payment (cash, bank transfer).
pub fn record(body: Value) -> OperationDescriptor {
    OperationDescriptor::post("/payments")
        .with_body(body)
        .invalidates("payments")
        .invalidates("tenants")
}

pub fn void(id: u64) -> OperationDescriptor {
    OperationDescriptor::post(format!("/payments/{id}/void"))
        .invalidates("payments")
        .invalidates("tenants")
}
