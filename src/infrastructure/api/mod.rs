//! API infrastructure - repository implementation, virtual host
//! verification and the API service

mod in_memory;
mod service;
mod verifier;

pub use in_memory::InMemoryApiRepository;
pub use service::{ApiService, CreateApiRequest, UpdateApiRequest};
pub use verifier::VirtualHostVerifier;
