//! Authentication operations: registration, OTP login, session teardown.

use tracing::{debug, info, instrument};

use agris_core::error::ApiError;
use agris_core::{AccessToken, Error, Result, TokenPair};

use crate::AgrisClient;
use crate::endpoints::{
    AUTH_REGISTER, AUTH_REQUEST_OTP, AUTH_VERIFY_OTP, RegisterRequest, RegisterResponse,
    RequestOtpRequest, RequestOtpResponse, VerifyOtpRequest, VerifyOtpResponse,
};

impl AgrisClient {
    /// Register a new user; the backend responds by dispatching an OTP.
    #[instrument(skip(self, request), fields(phone = %request.phone))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<RegisterResponse>> {
        debug!("registering user");
        self.post_public(AUTH_REGISTER, request).await
    }

    /// Request a login OTP for an existing user.
    #[instrument(skip(self))]
    pub async fn request_otp(&self, phone: &str) -> Result<Option<RequestOtpResponse>> {
        debug!("requesting OTP");
        self.post_public(AUTH_REQUEST_OTP, &RequestOtpRequest { phone })
            .await
    }

    /// Verify an OTP and establish a session.
    ///
    /// On success the token pair and the user profile are persisted to
    /// the token store. Unlike ordinary calls, a 2xx response without a
    /// usable body is an error here: a session cannot be established
    /// from nothing.
    #[instrument(skip(self, otp))]
    pub async fn verify_otp(&self, phone: &str, otp: &str) -> Result<VerifyOtpResponse> {
        info!("verifying OTP");

        let response: VerifyOtpResponse = self
            .post_public(AUTH_VERIFY_OTP, &VerifyOtpRequest { phone, otp })
            .await?
            .ok_or_else(|| {
                Error::Api(ApiError::new(
                    200,
                    Some("verify-otp response missing session tokens".to_string()),
                ))
            })?;

        let store = self.store();
        store.set_tokens(TokenPair::new(
            response.access_token.clone(),
            response.refresh_token.clone(),
        ));
        store.set_user(response.user.clone());
        debug!("session established");

        Ok(response)
    }

    /// Force a token refresh outside the 401 path.
    ///
    /// Shares the same single-flight coordinator as automatic refresh.
    pub async fn refresh_session(&self) -> Result<AccessToken> {
        self.refresh_now().await
    }

    /// Returns the stored user profile, if a session exists.
    pub fn stored_user(&self) -> Option<serde_json::Value> {
        self.store().user()
    }

    /// Returns true if a credential pair is currently stored.
    pub fn is_logged_in(&self) -> bool {
        self.store().access_token().is_some()
    }

    /// Discard the session.
    pub fn logout(&self) {
        info!("clearing session");
        self.store().clear();
    }
}
