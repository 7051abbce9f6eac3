//! Operation descriptors for the property-management endpoints.
//!
//! The CRUD screens themselves (navigation, forms, styling) live in the
//! app; what belongs here is the per-endpoint contract the gateway needs:
//! path, method, cache TTL for reads, and the cache patterns each mutation
//! invalidates. Centralizing the descriptors keeps the invalidation
//! contract in one place instead of scattered across call sites.
//!
//! TTLs are deliberately short: listings change often (leases sign, work
//! orders close), so a minute of staleness is the most any screen accepts.

pub mod maintenance;
pub mod payments;
pub mod properties;
pub mod tenants;
pub mod units;
