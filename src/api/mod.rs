//! Remote data gateway for the posts API.

pub mod client;
pub mod error;
pub mod gateway;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use gateway::PostsGateway;
