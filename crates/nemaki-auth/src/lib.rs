//! # nemaki-auth
//!
//! Session state for the NemakiWare toolkit.
//!
//! Provides the persisted session record (keyring, env var or file), a shared
//! [`SessionContext`] that owns it, token login/logout, and the classifier
//! that decides whether a failed call invalidates the session.

pub mod classify;
pub mod context;
pub mod error;
pub mod login;
pub mod session;
pub mod store;

pub use classify::{AuthFailure, classify};
pub use context::{AuthErrorListener, SessionContext};
pub use error::AuthError;
pub use login::LoginGrant;
pub use session::{Session, TOKEN_HEADER};
pub use store::SessionStore;
