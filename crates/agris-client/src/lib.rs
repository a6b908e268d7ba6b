//! agris-client - Authenticated HTTP client for the agris backend.
//!
//! All traffic flows through an [`AgrisClient`]: it attaches the stored
//! bearer token, detects authorization failure, performs a single
//! coordinated token refresh shared by all concurrent callers, and
//! retries the failed call exactly once.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use agris_core::{BaseUrl, MemoryTokenStore};
//! use agris_client::AgrisClient;
//!
//! # async fn example() -> agris_core::Result<()> {
//! let base = BaseUrl::from_env()?;
//! let client = AgrisClient::new(base, Arc::new(MemoryTokenStore::new()));
//!
//! client.request_otp("+919800000001").await?;
//! let session = client.verify_otp("+919800000001", "123456").await?;
//! println!("logged in: {}", session.user);
//!
//! for farm in client.farms().await? {
//!     println!("{}: {} {}", farm.id, farm.total_area, farm.area_unit);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod endpoints;
mod http;
mod refresh;

pub use client::{AgrisClient, ApiRequest};
pub use endpoints::{
    RegisterRequest, RegisterResponse, RequestOtpResponse, VerifyOtpResponse,
};
