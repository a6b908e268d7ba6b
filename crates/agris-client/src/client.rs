//! The authenticated request client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use agris_core::error::InvalidInputError;
use agris_core::{BaseUrl, Error, Result, TokenStore};

use crate::http::{self, HttpClient};
use crate::refresh::{DEFAULT_REFRESH_TIMEOUT, RefreshCoordinator};

/// One logical call to the backend.
///
/// Descriptors are built per call and carry everything needed to re-send
/// the identical request after a token refresh.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) headers: HeaderMap,
    pub(crate) auth: bool,
    pub(crate) timeout: Option<Duration>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
            auth: true,
            timeout: None,
        }
    }

    /// An authenticated GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// An authenticated POST request with a JSON body.
    pub fn post<B>(path: impl Into<String>, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        Self::new(Method::POST, path).with_body(body)
    }

    /// An authenticated PUT request with a JSON body.
    pub fn put<B>(path: impl Into<String>, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        Self::new(Method::PUT, path).with_body(body)
    }

    /// An authenticated DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn with_body<B>(mut self, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(|e| InvalidInputError::Other {
            message: format!("unserializable request body: {}", e),
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Merge a caller-supplied header.
    pub fn with_header<K: IntoHeaderName>(mut self, key: K, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Skip bearer-token injection (pre-session endpoints).
    pub fn without_auth(mut self) -> Self {
        self.auth = false;
        self
    }

    /// Bound this call with a timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the agris backend.
///
/// Cheap to clone (internal `Arc`); clones share the token store and the
/// refresh coordinator, so a burst of 401s across clones still produces
/// a single refresh call.
///
/// # Behavior
///
/// - A stored access token is attached as `Authorization: Bearer <token>`
///   to authenticated requests. A missing token is not a local error;
///   the request is sent bare and rejected server-side.
/// - A 401 on the first attempt of an authenticated call triggers the
///   shared refresh and exactly one retry with the new token. The retry
///   never triggers another refresh.
/// - No other failure is retried.
#[derive(Clone)]
pub struct AgrisClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    store: Arc<dyn TokenStore>,
    refresh: RefreshCoordinator,
}

impl AgrisClient {
    /// Create a client for the given backend and token store.
    pub fn new(base: BaseUrl, store: Arc<dyn TokenStore>) -> Self {
        Self::with_refresh_timeout(base, store, DEFAULT_REFRESH_TIMEOUT)
    }

    /// Create a client with a custom bound on the refresh call.
    ///
    /// A hung refresh would otherwise block every waiting caller; on
    /// expiry all waiters fail and the session is cleared.
    pub fn with_refresh_timeout(
        base: BaseUrl,
        store: Arc<dyn TokenStore>,
        refresh_timeout: Duration,
    ) -> Self {
        let http = HttpClient::new(base);
        let refresh = RefreshCoordinator::new(http.clone(), Arc::clone(&store), refresh_timeout);
        Self {
            inner: Arc::new(ClientInner {
                http,
                store,
                refresh,
            }),
        }
    }

    /// Returns the backend base URL.
    pub fn base(&self) -> &BaseUrl {
        self.inner.http.base()
    }

    /// Returns the token store backing this client.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    // ------------------------------------------------------------------
    // Generic verbs
    // ------------------------------------------------------------------

    /// Authenticated GET.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.execute(ApiRequest::get(path)).await
    }

    /// Authenticated POST with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ApiRequest::post(path, body)?).await
    }

    /// Authenticated PUT with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ApiRequest::put(path, body)?).await
    }

    /// Authenticated DELETE.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.execute(ApiRequest::delete(path)).await
    }

    /// Authenticated GET for a binary payload (PDF reports and the like).
    ///
    /// The payload is returned raw; no JSON parsing is ever attempted.
    pub async fn get_blob(&self, path: &str) -> Result<Vec<u8>> {
        self.execute_blob(ApiRequest::get(path)).await
    }

    /// Unauthenticated GET, for pre-session endpoints.
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.execute(ApiRequest::get(path).without_auth()).await
    }

    /// Unauthenticated POST, for pre-session endpoints.
    pub async fn post_public<T, B>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ApiRequest::post(path, body)?.without_auth())
            .await
    }

    /// Execute a request descriptor and decode the response as JSON.
    ///
    /// Returns `Ok(None)` for 204, empty, or undecodable bodies (the
    /// lenient decode policy).
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<T>> {
        let response = self.dispatch(&request).await?;
        http::decode_json(response).await
    }

    /// Execute a request descriptor and return the raw response bytes.
    pub async fn execute_blob(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let response = self.dispatch(&request).await?;
        let bytes = response.bytes().await.map_err(http::transport)?;
        Ok(bytes.to_vec())
    }

    /// Run the shared refresh procedure and return the new access token.
    pub(crate) async fn refresh_now(&self) -> Result<agris_core::AccessToken> {
        self.inner
            .refresh
            .get_or_start()
            .await
            .map_err(|e| Error::Auth(e.into()))
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Send a request, handling the 401-refresh-retry cycle.
    async fn dispatch(&self, request: &ApiRequest) -> Result<reqwest::Response> {
        let token = if request.auth {
            self.inner.store.access_token()
        } else {
            None
        };

        let response = self.inner.http.send(request, token.as_ref()).await?;

        if request.auth && response.status() == StatusCode::UNAUTHORIZED {
            debug!(path = %request.path, "401 received, refreshing session");
            let new_token = self
                .inner
                .refresh
                .get_or_start()
                .await
                .map_err(|e| Error::Auth(e.into()))?;

            // Retry exactly once with the refreshed token. A second 401
            // surfaces as a plain API error rather than another refresh.
            let response = self.inner.http.send(request, Some(&new_token)).await?;
            return Self::require_success(response).await;
        }

        Self::require_success(response).await
    }

    /// Convert any non-2xx response into an API error.
    async fn require_success(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::Api(http::read_error(response).await))
        }
    }
}

impl std::fmt::Debug for AgrisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgrisClient")
            .field("base", self.inner.http.base())
            .finish_non_exhaustive()
    }
}
