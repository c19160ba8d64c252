//! Persistence of the session record.
//!
//! The record is stored as JSON under the fixed key [`SESSION_KEY`]. Load
//! priority: keyring → `NEMAKI_SESSION` env → file (`~/.nemaki/session.json`).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::Session;

/// Fixed key the session record lives under.
pub const SESSION_KEY: &str = "nemakiware_auth";

const DEFAULT_KEYRING_SERVICE: &str = "nemaki-toolkit";
const SESSION_ENV: &str = "NEMAKI_SESSION";
const SESSION_FILE_NAME: &str = "session.json";

/// Where the session record is read from and written to.
#[derive(Debug, Clone)]
pub struct SessionStore {
    keyring_service: Option<String>,
    read_env: bool,
    file_path: Option<PathBuf>,
}

impl SessionStore {
    /// Keyring + env + `~/.nemaki/session.json`.
    ///
    /// The keyring service defaults to `"nemaki-toolkit"`; override it via
    /// `NEMAKI_KEYRING_SERVICE` to keep test runs away from real credentials.
    #[must_use]
    pub fn system() -> Self {
        Self {
            keyring_service: Some(
                std::env::var("NEMAKI_KEYRING_SERVICE")
                    .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string()),
            ),
            read_env: true,
            file_path: dirs::home_dir().map(|h| h.join(".nemaki").join(SESSION_FILE_NAME)),
        }
    }

    /// File-only store, no keyring or environment lookups.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: None,
            read_env: false,
            file_path: Some(path.into()),
        }
    }

    /// Store that persists nothing. The session lives only in memory.
    #[must_use]
    pub const fn ephemeral() -> Self {
        Self {
            keyring_service: None,
            read_env: false,
            file_path: None,
        }
    }

    /// Persist a session. Falls back to the file if the keyring is
    /// unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if both keyring and file storage fail.
    pub fn store(&self, session: &Session) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::StoreError(format!("encode session: {e}")))?;

        if let Some(service) = &self.keyring_service {
            match keyring::Entry::new(service, SESSION_KEY) {
                Ok(entry) => match entry.set_password(&json) {
                    Ok(()) => return Ok(()),
                    Err(error) => {
                        tracing::warn!(%error, "keyring store failed; falling back to file");
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "keyring unavailable; falling back to file");
                }
            }
        }

        match &self.file_path {
            Some(path) => store_file(path, &json),
            None if self.keyring_service.is_some() => Err(AuthError::StoreError(
                "home directory not found; cannot store session".into(),
            )),
            None => Ok(()),
        }
    }

    /// Load the first decodable session record.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        self.load_with_source().map(|(session, _)| session)
    }

    /// Which tier the current record came from (for status display).
    #[must_use]
    pub fn detect_source(&self) -> Option<&'static str> {
        self.load_with_source().map(|(_, source)| source)
    }

    /// Delete the record from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if the session file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if let Some(service) = &self.keyring_service
            && let Ok(entry) = keyring::Entry::new(service, SESSION_KEY)
        {
            // May not exist.
            let _ = entry.delete_credential();
        }

        if let Some(path) = &self.file_path
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::StoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    fn load_with_source(&self) -> Option<(Session, &'static str)> {
        if let Some(service) = &self.keyring_service
            && let Ok(entry) = keyring::Entry::new(service, SESSION_KEY)
            && let Ok(json) = entry.get_password()
            && let Some(session) = decode(&json, "keyring")
        {
            return Some((session, "keyring"));
        }

        if self.read_env
            && let Ok(json) = std::env::var(SESSION_ENV)
            && let Some(session) = decode(&json, "env")
        {
            return Some((session, "env"));
        }

        let path = self.file_path.as_ref()?;
        let json = fs::read_to_string(path).ok()?;
        decode(&json, "file").map(|session| (session, "file"))
    }
}

fn decode(json: &str, source: &str) -> Option<Session> {
    if json.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Session>(json) {
        Ok(session) if !session.token.is_empty() => Some(session),
        Ok(_) => None,
        Err(error) => {
            tracing::warn!(source, %error, "ignoring corrupted session record");
            None
        }
    }
}

fn store_file(path: &Path, json: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::StoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, json)
        .map_err(|e| AuthError::StoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::StoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session {
            username: "alice".into(),
            token: "tok".into(),
            repository_id: "bedroom".into(),
            is_admin: false,
        }
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::file(tmp.path().join("nested").join("session.json"));

        store.store(&session()).expect("store");
        assert_eq!(store.load(), Some(session()));
        assert_eq!(store.detect_source(), Some("file"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(tmp.path().join("nested").join("session.json"))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.delete().expect("delete");
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupted_or_blank_records_are_ignored() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        let store = SessionStore::file(&path);

        fs::write(&path, "   \n").expect("write");
        assert!(store.load().is_none());

        fs::write(&path, "{not json").expect("write");
        assert!(store.load().is_none());

        fs::write(&path, r#"{"username":"a","token":"","repositoryId":"r"}"#).expect("write");
        assert!(store.load().is_none(), "empty token is not a session");
    }

    #[test]
    fn ephemeral_store_keeps_nothing() {
        let store = SessionStore::ephemeral();
        store.store(&session()).expect("store is a no-op");
        assert!(store.load().is_none());
        assert!(store.delete().is_ok());
    }
}
