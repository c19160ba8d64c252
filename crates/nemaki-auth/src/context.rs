//! Shared session context.
//!
//! One [`SessionContext`] owns the optional session for the whole process.
//! Clients hold it behind an `Arc` and route every 401/403 through
//! [`SessionContext::handle_auth_error`].

use std::sync::{Arc, PoisonError, RwLock};

use nemaki_config::AuthScheme;
use reqwest::header::HeaderMap;

use crate::classify::AuthFailure;
use crate::error::AuthError;
use crate::session::Session;
use crate::store::SessionStore;

/// Called once per rejected response, after the session has been cleared.
pub type AuthErrorListener = Arc<dyn Fn(AuthFailure) + Send + Sync>;

pub struct SessionContext {
    session: RwLock<Option<Session>>,
    store: SessionStore,
    scheme: AuthScheme,
    listener: RwLock<Option<AuthErrorListener>>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .field("store", &self.store)
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    /// Empty context. Nothing is read from `store` until [`Self::restore`].
    #[must_use]
    pub fn new(store: SessionStore, scheme: AuthScheme) -> Self {
        Self {
            session: RwLock::new(None),
            store,
            scheme,
            listener: RwLock::new(None),
        }
    }

    /// Context seeded with whatever session `store` currently holds.
    #[must_use]
    pub fn restore(store: SessionStore, scheme: AuthScheme) -> Self {
        let session = store.load();
        if let Some(session) = &session {
            tracing::debug!(user = %session.username, repository = %session.repository_id, "restored session");
        }
        Self {
            session: RwLock::new(session),
            store,
            scheme,
            listener: RwLock::new(None),
        }
    }

    /// Register the listener notified on auth failures. Replaces any previous one.
    pub fn set_listener(&self, listener: AuthErrorListener) {
        *self
            .listener
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    #[must_use]
    pub const fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The current session, or [`AuthError::NotAuthenticated`].
    ///
    /// # Errors
    ///
    /// Fails when no session is held.
    pub fn require(&self) -> Result<Session, AuthError> {
        self.current().ok_or(AuthError::NotAuthenticated)
    }

    /// The current session if it belongs to an administrator.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] without a session,
    /// [`AuthError::AdminRequired`] for non-admin users.
    pub fn require_admin(&self) -> Result<Session, AuthError> {
        let session = self.require()?;
        if session.is_admin {
            Ok(session)
        } else {
            Err(AuthError::AdminRequired)
        }
    }

    /// Install `session` in memory and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if persistence fails. The in-memory
    /// session is set regardless.
    pub fn establish(&self, session: Session) -> Result<(), AuthError> {
        let persisted = self.store.store(&session);
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
        persisted
    }

    /// Drop the session from memory and the persisted store.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if the stored record cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.store.delete()
    }

    /// Request headers for the current session. Empty when logged out.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.headers(self.scheme))
            .unwrap_or_default()
    }

    /// Clear the session and notify the listener.
    ///
    /// Callers invoke this once per rejected response; it does not dedupe.
    pub fn handle_auth_error(&self, failure: AuthFailure) {
        tracing::warn!(%failure, "server rejected the session; clearing it");
        if let Err(error) = self.clear() {
            tracing::warn!(%error, "failed to remove stored session");
        }
        let listener = self
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(listener) = listener {
            listener(failure);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use pretty_assertions::assert_eq;

    fn session(is_admin: bool) -> Session {
        Session {
            username: "bob".into(),
            token: "t".into(),
            repository_id: "bedroom".into(),
            is_admin,
        }
    }

    #[test]
    fn require_reflects_session_and_admin_flag() {
        let ctx = SessionContext::new(SessionStore::ephemeral(), AuthScheme::Bearer);
        assert!(matches!(ctx.require(), Err(AuthError::NotAuthenticated)));

        ctx.establish(session(false)).expect("establish");
        assert_eq!(ctx.require().expect("session").username, "bob");
        assert!(matches!(ctx.require_admin(), Err(AuthError::AdminRequired)));

        ctx.establish(session(true)).expect("establish");
        assert!(ctx.require_admin().is_ok());
    }

    #[test]
    fn headers_are_empty_when_logged_out() {
        let ctx = SessionContext::new(SessionStore::ephemeral(), AuthScheme::Bearer);
        assert!(ctx.headers().is_empty());
        ctx.establish(session(false)).expect("establish");
        assert_eq!(ctx.headers().len(), 1);
    }

    #[test]
    fn auth_error_clears_session_and_notifies_once() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::file(tmp.path().join("session.json"));
        let ctx = SessionContext::new(store.clone(), AuthScheme::Bearer);
        ctx.establish(session(false)).expect("establish");
        assert!(store.load().is_some());

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        ctx.set_listener(Arc::new(move |failure| {
            assert_eq!(failure, AuthFailure::Unauthorized);
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        ctx.handle_auth_error(AuthFailure::Unauthorized);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!ctx.is_authenticated());
        assert!(store.load().is_none(), "persisted record removed");
    }

    #[test]
    fn restore_picks_up_persisted_session() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::file(tmp.path().join("session.json"));
        store.store(&session(true)).expect("store");

        let ctx = SessionContext::restore(store, AuthScheme::BasicToken);
        assert_eq!(ctx.current(), Some(session(true)));
        assert_eq!(ctx.headers().len(), 2);
    }
}
