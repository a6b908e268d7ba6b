//! Low-level HTTP dispatch.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use agris_core::error::{ApiError, TransportError};
use agris_core::{AccessToken, BaseUrl, Error, Result};

use crate::client::ApiRequest;

/// Map a reqwest failure onto the transport error taxonomy.
///
/// Timeouts are kept distinct so callers can tell "slow backend" from
/// "backend unreachable".
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let inner = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(inner)
}

/// HTTP client bound to a backend base URL.
///
/// This layer only builds and sends requests; auth decisions and the
/// 401 retry live in [`AgrisClient`](crate::AgrisClient).
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base: BaseUrl,
}

impl HttpClient {
    /// Create a new HTTP client for the given base URL.
    pub(crate) fn new(base: BaseUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("agris/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this client is configured for.
    pub(crate) fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Send a request described by an [`ApiRequest`], attaching the given
    /// bearer token if any.
    ///
    /// The token is a parameter rather than a field so the same request
    /// can be re-sent with a refreshed token.
    pub(crate) async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&AccessToken>,
    ) -> Result<reqwest::Response> {
        let url = self.base.endpoint_url(&request.path);
        trace!(method = %request.method, %url, "sending request");

        let mut builder = self.client.request(request.method.clone(), &url);

        if let Some(ref body) = request.body {
            // .json() also sets Content-Type: application/json
            builder = builder.json(body);
        }
        if !request.headers.is_empty() {
            builder = builder.headers(request.headers.clone());
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        builder.send().await.map_err(transport)
    }

    /// POST a JSON body without auth or retry handling.
    ///
    /// Used by the refresh coordinator, which must not recurse into the
    /// authenticated dispatch path.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base.endpoint_url(path);
        trace!(%url, "sending bare POST");

        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)
    }
}

/// Decode a successful response body as JSON.
///
/// Lenient decode policy: a 204, an empty body, or a body that is not
/// valid JSON for `T` all resolve to `None` rather than an error. This
/// preserves the backend contract where "no usable body" is an ordinary
/// outcome for the caller to interpret.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let bytes = response.bytes().await.map_err(transport)?;
    if bytes.is_empty() {
        return Ok(None);
    }

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            debug!(error = %err, "undecodable response body, resolving empty");
            Ok(None)
        }
    }
}

/// Read a non-2xx response into an [`ApiError`].
///
/// The backend reports errors as `{"detail": ...}`; when the body is not
/// in that shape the raw text is carried instead.
pub(crate) async fn read_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();

    let detail = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.detail)
        .map(|detail| match detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .or_else(|| (!text.is_empty()).then_some(text));

    ApiError::new(status, detail)
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}
