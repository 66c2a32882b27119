//! Organization domain

mod entity;
mod repository;

pub use entity::{Organization, OrganizationId};
pub use repository::OrganizationRepository;
