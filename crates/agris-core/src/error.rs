//! Error types for the agris client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for agris operations.
///
/// This error type covers all possible failure modes in the client,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (session invalidated, refresh failed).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// API errors (non-2xx responses from the backend).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid base URL, malformed identifiers).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The call returned 401 and no new session could be obtained.
    ///
    /// By the time this surfaces the token store has been cleared; the
    /// user must log in again.
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] RefreshError),
}

/// Failure modes of the token refresh procedure.
///
/// Cloneable so a single refresh outcome can be distributed to every
/// caller waiting on the in-flight refresh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    /// No refresh token is stored; refresh was not attempted.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// The refresh endpoint rejected the refresh token.
    #[error("refresh rejected with HTTP {status}")]
    Rejected { status: u16 },

    /// The refresh response was missing one of the token fields.
    #[error("refresh response missing token fields")]
    MalformedResponse,

    /// The refresh call failed at the transport level.
    #[error("refresh transport failure: {message}")]
    Transport { message: String },

    /// The refresh call did not settle within the coordinator's timeout.
    #[error("refresh timed out")]
    TimedOut,
}

/// An error response from the backend API.
///
/// Carries the HTTP status and, when the backend supplied one, the
/// `detail` message from the response body.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error detail from the server, if available.
    pub detail: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL format.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
