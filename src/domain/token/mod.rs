//! Personal access token domain

mod entity;
mod repository;

pub use entity::{PersonalToken, TokenId};
pub use repository::TokenRepository;
