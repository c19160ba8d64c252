use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("administrator privileges required for this command")]
    AdminRequired,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("login failed ({status}): {message}")]
    LoginFailed { status: u16, message: String },

    #[error("login request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("session store error: {0}")]
    StoreError(String),
}
