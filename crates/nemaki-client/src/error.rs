//! Client error types.

use nemaki_auth::AuthFailure;
use nemaki_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to a NemakiWare server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the session. The shared session has already been
    /// cleared when this is returned.
    #[error("session rejected by server ({0})")]
    Auth(AuthFailure),

    /// 404. Never treated as an auth failure.
    #[error("not found: {url}")]
    NotFound {
        /// Requested URL.
        url: String,
    },

    /// Any other non-success answer, or a NemakiWare `status: failure` body.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The payload parsed as JSON but did not match the CMIS object model.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Request rejected locally before sending.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn auth_failure(&self) -> Option<AuthFailure> {
        match self {
            Self::Auth(failure) => Some(*failure),
            _ => None,
        }
    }

    /// HTTP status behind this error, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth(failure) => Some(failure.status()),
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
