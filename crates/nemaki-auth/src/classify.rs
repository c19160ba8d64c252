//! Decide whether a failed call means the session is no longer valid.

use std::fmt;

/// Authentication failure kinds that invalidate the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    Unauthorized,
    Forbidden,
}

impl AuthFailure {
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
        }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("401 Unauthorized"),
            Self::Forbidden => f.write_str("403 Forbidden"),
        }
    }
}

/// Classify a failed call by HTTP status, falling back to the error text.
///
/// 404 is never an auth failure, even when the message mentions one. The
/// text fallback covers errors that reach the caller without a status
/// (e.g. a proxy that rewrites the body but answers 200/500).
#[must_use]
pub fn classify(status: Option<u16>, message: &str) -> Option<AuthFailure> {
    match status {
        Some(401) => return Some(AuthFailure::Unauthorized),
        Some(403) => return Some(AuthFailure::Forbidden),
        Some(404) => return None,
        _ => {}
    }
    if message.contains("401") || message.contains("Unauthorized") {
        Some(AuthFailure::Unauthorized)
    } else if message.contains("403") || message.contains("Forbidden") {
        Some(AuthFailure::Forbidden)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_codes_take_priority() {
        assert_eq!(classify(Some(401), ""), Some(AuthFailure::Unauthorized));
        assert_eq!(classify(Some(403), ""), Some(AuthFailure::Forbidden));
        assert_eq!(classify(Some(500), "boom"), None);
    }

    #[test]
    fn not_found_is_never_an_auth_failure() {
        assert_eq!(classify(Some(404), "401 Unauthorized upstream"), None);
    }

    #[test]
    fn message_fallback_without_status() {
        assert_eq!(
            classify(None, "request failed: Unauthorized"),
            Some(AuthFailure::Unauthorized)
        );
        assert_eq!(
            classify(None, "HTTP 403 from proxy"),
            Some(AuthFailure::Forbidden)
        );
        assert_eq!(classify(None, "connection reset"), None);
    }
}
