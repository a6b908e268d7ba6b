//! File-backed token store for persisting login state.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use agris_core::{AccessToken, RefreshToken, TokenPair, TokenStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
///
/// The fields are independently optional on disk, but a credential pair
/// is only reported when both tokens are present.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<serde_json::Value>,
}

/// A token store persisted to `session.json` in the platform data dir.
///
/// All operations degrade gracefully: if the data directory cannot be
/// resolved or the file cannot be read or written, the store behaves as
/// empty and logs a warning instead of failing the calling operation.
#[derive(Debug)]
pub struct FileTokenStore {
    path: Option<PathBuf>,
}

impl FileTokenStore {
    /// Create a store at the default platform location.
    pub fn from_default_location() -> Self {
        let path = default_session_path();
        if path.is_none() {
            warn!("no data directory available, session will not persist");
        }
        Self { path }
    }

    /// Create a store backed by a specific file.
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn load(&self) -> StoredSession {
        let Some(ref path) = self.path else {
            return StoredSession::default();
        };

        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!(error = %err, "invalid session file, treating as logged out");
                StoredSession::default()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoredSession::default(),
            Err(err) => {
                warn!(error = %err, "failed to read session file");
                StoredSession::default()
            }
        }
    }

    fn save(&self, session: &StoredSession) {
        let Some(ref path) = self.path else {
            return;
        };

        let json = match serde_json::to_string_pretty(session) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to serialize session");
                return;
            }
        };

        if let Err(err) = fs::write(path, &json) {
            warn!(error = %err, "failed to write session file");
            return;
        }

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        if let Ok(metadata) = fs::metadata(path) {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(err) = fs::set_permissions(path, perms) {
                warn!(error = %err, "failed to restrict session file permissions");
            }
        }
    }
}

/// Resolve the session file path, creating the data directory.
fn default_session_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "agris")?;
    let data_dir = dirs.data_dir();
    if let Err(err) = fs::create_dir_all(data_dir) {
        warn!(error = %err, "failed to create data directory");
        return None;
    }
    Some(data_dir.join("session.json"))
}

impl TokenStore for FileTokenStore {
    fn set_tokens(&self, tokens: TokenPair) {
        let mut session = self.load();
        session.access_token = Some(tokens.access.as_str().to_string());
        session.refresh_token = Some(tokens.refresh.as_str().to_string());
        self.save(&session);
    }

    fn access_token(&self) -> Option<AccessToken> {
        let session = self.load();
        // Only report a complete pair
        match (session.access_token, session.refresh_token) {
            (Some(access), Some(_)) => Some(AccessToken::new(access)),
            _ => None,
        }
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        let session = self.load();
        match (session.access_token, session.refresh_token) {
            (Some(_), Some(refresh)) => Some(RefreshToken::new(refresh)),
            _ => None,
        }
    }

    fn set_user(&self, profile: serde_json::Value) {
        let mut session = self.load();
        session.user = Some(profile);
        self.save(&session);
    }

    fn user(&self) -> Option<serde_json::Value> {
        self.load().user
    }

    fn clear(&self) {
        let Some(ref path) = self.path else {
            return;
        };
        if let Err(err) = fs::remove_file(path)
            && err.kind() != std::io::ErrorKind::NotFound
        {
            warn!(error = %err, "failed to remove session file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_store() -> (tempfile::TempDir, FileTokenStore) {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FileTokenStore::at(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn empty_store_reports_logged_out() {
        let (_dir, store) = temp_store();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn tokens_round_trip_through_disk() {
        let (_dir, store) = temp_store();
        store.set_tokens(TokenPair::new("a1", "r1"));
        store.set_user(json!({"name": "Asha"}));

        assert_eq!(store.access_token().unwrap(), "a1");
        assert_eq!(store.refresh_token().unwrap(), "r1");
        assert_eq!(store.user().unwrap()["name"], "Asha");
    }

    #[test]
    fn clear_removes_session_file() {
        let (dir, store) = temp_store();
        store.set_tokens(TokenPair::new("a1", "r1"));
        store.clear();

        assert!(store.access_token().is_none());
        assert!(!dir.path().join("session.json").exists());
    }

    #[test]
    fn partial_pair_on_disk_reports_no_tokens() {
        let (dir, store) = temp_store();
        fs::write(
            dir.path().join("session.json"),
            r#"{"access_token": "a1"}"#,
        )
        .unwrap();

        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn corrupt_session_file_is_treated_as_logged_out() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join("session.json"), "not json").unwrap();

        assert!(store.access_token().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_has_restrictive_permissions() {
        let (dir, store) = temp_store();
        store.set_tokens(TokenPair::new("a1", "r1"));

        let mode = fs::metadata(dir.path().join("session.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
