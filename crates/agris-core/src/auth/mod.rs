//! Authentication primitives: token types and the token store.

mod store;
mod tokens;

pub use store::{MemoryTokenStore, TokenStore};
pub use tokens::{AccessToken, RefreshToken, TokenPair};
