//! Endpoint paths and auth request/response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST /auth/register
pub const AUTH_REGISTER: &str = "/auth/register";

/// POST /auth/request-otp
pub const AUTH_REQUEST_OTP: &str = "/auth/request-otp";

/// POST /auth/verify-otp
pub const AUTH_VERIFY_OTP: &str = "/auth/verify-otp";

/// POST /auth/refresh
pub const AUTH_REFRESH: &str = "/auth/refresh";

/// POST /farms, GET /farms
pub const FARMS: &str = "/farms";

/// POST /expenses
pub const EXPENSES: &str = "/expenses";

/// POST /yields
pub const YIELDS: &str = "/yields";

/// POST /prediction/crop
pub const PREDICT_CROP: &str = "/prediction/crop";

/// POST /prediction/recommendation
pub const PREDICT_RECOMMENDATION: &str = "/prediction/recommendation";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Preferred language code; the backend defaults to "en" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response from registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    pub user_temp_id: String,
    pub message: String,
}

/// Request body for requesting a login OTP.
#[derive(Debug, Serialize)]
pub(crate) struct RequestOtpRequest<'a> {
    pub phone: &'a str,
}

/// Response from request-otp.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestOtpResponse {
    pub status: String,
    pub message: String,
}

/// Request body for OTP verification.
#[derive(Debug, Serialize)]
pub(crate) struct VerifyOtpRequest<'a> {
    pub phone: &'a str,
    pub otp: &'a str,
}

/// Response from verify-otp.
///
/// The user profile is carried as opaque JSON; the client stores it
/// without inspecting it.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpResponse {
    pub status: String,
    pub user: serde_json::Value,
    pub access_token: String,
    pub refresh_token: String,
}

/// Request body for token refresh.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Response from token refresh.
///
/// Any other shape (missing field, non-JSON body) is a refresh failure.
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}
