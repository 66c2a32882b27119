//! Console parameter domain

mod entity;
mod repository;

pub use entity::{ParameterKey, ParameterOverride, ParameterType};
pub use repository::ParameterRepository;
