//! Token store: durable session storage behind a capability interface.

use std::sync::RwLock;

use super::tokens::{AccessToken, RefreshToken, TokenPair};

/// Durable key-value storage for session credentials and the user profile.
///
/// The store holds at most one credential pair and one opaque user
/// profile. It carries no expiry logic of its own; token lifetime is the
/// backend's concern.
///
/// # Contract
///
/// - Operations are infallible: an implementation whose backing medium is
///   unavailable degrades to no-ops and `None`, it does not error.
/// - Credentials are replaced wholesale via [`TokenStore::set_tokens`];
///   a reader never observes a partial pair.
/// - [`TokenStore::clear`] removes both tokens and the user profile
///   (logout semantics).
pub trait TokenStore: Send + Sync {
    /// Replace the stored credential pair.
    fn set_tokens(&self, tokens: TokenPair);

    /// Returns the stored access token, if any.
    fn access_token(&self) -> Option<AccessToken>;

    /// Returns the stored refresh token, if any.
    fn refresh_token(&self) -> Option<RefreshToken>;

    /// Store the user profile as an opaque JSON blob.
    fn set_user(&self, profile: serde_json::Value);

    /// Returns the stored user profile, if any.
    fn user(&self) -> Option<serde_json::Value>;

    /// Remove the credential pair and the user profile.
    fn clear(&self);
}

#[derive(Debug, Default)]
struct StoreState {
    tokens: Option<TokenPair>,
    user: Option<serde_json::Value>,
}

/// An in-memory token store.
///
/// Suitable for tests and for embedding the client in contexts without
/// durable storage. State lives for the lifetime of the store only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    state: RwLock<StoreState>,
}

impl MemoryTokenStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set_tokens(&self, tokens: TokenPair) {
        let mut state = self.state.write().unwrap();
        state.tokens = Some(tokens);
    }

    fn access_token(&self) -> Option<AccessToken> {
        let state = self.state.read().unwrap();
        state.tokens.as_ref().map(|t| t.access.clone())
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        let state = self.state.read().unwrap();
        state.tokens.as_ref().map(|t| t.refresh.clone())
    }

    fn set_user(&self, profile: serde_json::Value) {
        let mut state = self.state.write().unwrap();
        state.user = Some(profile);
    }

    fn user(&self) -> Option<serde_json::Value> {
        let state = self.state.read().unwrap();
        state.user.clone()
    }

    fn clear(&self) {
        let mut state = self.state.write().unwrap();
        state.tokens = None;
        state.user = None;
    }
}
