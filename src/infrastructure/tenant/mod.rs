//! Tenant infrastructure

mod in_memory;
mod service;

pub use in_memory::InMemoryTenantRepository;
pub use service::{CreateTenantRequest, TenantService, UpdateTenantRequest};
