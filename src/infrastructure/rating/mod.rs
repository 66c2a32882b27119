//! Rating infrastructure

mod in_memory;
mod service;

pub use in_memory::InMemoryRatingRepository;
pub use service::{CreateRatingRequest, RatingService};
