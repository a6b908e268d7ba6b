//! Validated value types.

mod base_url;

pub use base_url::{BASE_URL_ENV, BaseUrl, DEFAULT_BASE_URL};
