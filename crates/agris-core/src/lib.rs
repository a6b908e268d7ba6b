//! agris-core - Core types and traits for the agris farm-management client.

pub mod auth;
pub mod error;
pub mod models;
pub mod types;

pub use auth::{AccessToken, MemoryTokenStore, RefreshToken, TokenPair, TokenStore};
pub use error::{ApiError, AuthError, Error, RefreshError};
pub use types::BaseUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
