//! Personal token infrastructure

mod generator;
mod in_memory;
mod service;

pub use generator::{GeneratedToken, TokenGenerator};
pub use in_memory::InMemoryTokenRepository;
pub use service::{CreatedToken, TokenService};
