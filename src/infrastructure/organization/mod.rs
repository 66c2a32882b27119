//! Organization infrastructure

mod in_memory;
mod service;

pub use in_memory::InMemoryOrganizationRepository;
pub use service::{CreateOrganizationRequest, OrganizationService};
