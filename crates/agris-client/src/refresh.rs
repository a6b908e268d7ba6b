//! Single-flight token refresh coordination.
//!
//! No matter how many concurrent calls observe a 401 at the same time,
//! exactly one network call is made to the refresh endpoint and every
//! caller receives its outcome.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tracing::{debug, info, warn};

use agris_core::{AccessToken, RefreshError, TokenPair, TokenStore};

use crate::endpoints::{AUTH_REFRESH, RefreshRequest, RefreshResponse};
use crate::http::HttpClient;

/// How long a refresh call may stay outstanding before every waiter is
/// failed and the session is cleared.
pub(crate) const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(30);

type RefreshOutcome = Result<AccessToken, RefreshError>;
type SharedRefresh = Shared<BoxFuture<'static, RefreshOutcome>>;

/// Coordinates token refresh across concurrent callers.
///
/// State machine: **Idle** (slot empty) → first caller publishes a shared
/// future and the slot holds it (**Refreshing**) → the refresh settles,
/// the slot is cleared (**Idle**). Callers arriving while a refresh is in
/// flight attach to the published future instead of starting their own.
#[derive(Clone)]
pub(crate) struct RefreshCoordinator {
    inner: Arc<CoordinatorInner>,
}

struct CoordinatorInner {
    http: HttpClient,
    store: Arc<dyn TokenStore>,
    timeout: Duration,
    in_flight: Mutex<Option<SharedRefresh>>,
}

impl RefreshCoordinator {
    pub(crate) fn new(http: HttpClient, store: Arc<dyn TokenStore>, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(CoordinatorInner {
                http,
                store,
                timeout,
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Join the in-flight refresh, or start one.
    ///
    /// The refresh runs on a spawned task so it settles even if every
    /// waiter is cancelled. On any failure the token store has already
    /// been cleared by the time the outcome is observable.
    pub(crate) fn get_or_start(&self) -> SharedRefresh {
        let mut slot = self.inner.in_flight.lock().unwrap();

        if let Some(fut) = slot.as_ref() {
            debug!("refresh already in flight, attaching");
            return fut.clone();
        }

        info!("starting token refresh");
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let outcome = match tokio::time::timeout(inner.timeout, refresh_once(&inner)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!("token refresh timed out, clearing session");
                    inner.store.clear();
                    Err(RefreshError::TimedOut)
                }
            };
            // Back to idle; the next 401 starts a fresh cycle. The slot
            // cannot be cleared before it is published because the caller
            // still holds the lock while this task is spawned.
            *inner.in_flight.lock().unwrap() = None;
            outcome
        });

        let fut = async move {
            handle.await.unwrap_or_else(|_| {
                Err(RefreshError::Transport {
                    message: "refresh task aborted".to_string(),
                })
            })
        }
        .boxed()
        .shared();

        *slot = Some(fut.clone());
        fut
    }
}

/// One refresh attempt against the backend.
async fn refresh_once(inner: &CoordinatorInner) -> RefreshOutcome {
    let Some(refresh_token) = inner.store.refresh_token() else {
        debug!("no refresh token stored, clearing session");
        inner.store.clear();
        return Err(RefreshError::NoRefreshToken);
    };

    let request = RefreshRequest {
        refresh_token: refresh_token.as_str(),
    };

    let response = match inner.http.post_json(AUTH_REFRESH, &request).await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "refresh transport failure, clearing session");
            inner.store.clear();
            return Err(RefreshError::Transport {
                message: err.to_string(),
            });
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "refresh rejected, clearing session");
        inner.store.clear();
        return Err(RefreshError::Rejected {
            status: status.as_u16(),
        });
    }

    let body: RefreshResponse = match response.json().await {
        Ok(body) => body,
        Err(_) => {
            warn!("refresh response malformed, clearing session");
            inner.store.clear();
            return Err(RefreshError::MalformedResponse);
        }
    };

    if body.access_token.is_empty() || body.refresh_token.is_empty() {
        warn!("refresh response missing token values, clearing session");
        inner.store.clear();
        return Err(RefreshError::MalformedResponse);
    }

    let pair = TokenPair::new(body.access_token, body.refresh_token);
    let access = pair.access.clone();
    inner.store.set_tokens(pair);
    debug!("token refresh succeeded");

    Ok(access)
}
