//! Environment infrastructure

mod in_memory;
mod service;

pub use in_memory::InMemoryEnvironmentRepository;
pub use service::{CreateEnvironmentRequest, EnvironmentService, UpdateEnvironmentRequest};
