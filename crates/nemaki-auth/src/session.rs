//! The persisted session record and the request headers derived from it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use nemaki_config::AuthScheme;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

/// Legacy token header understood by the NemakiWare servlet filter.
pub const TOKEN_HEADER: &str = "nemaki_auth_token";

/// Credentials of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub token: String,
    pub repository_id: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl Session {
    /// Request headers for this session under `scheme`.
    ///
    /// Values that are not valid header text (control characters in a
    /// token) are skipped with a warning; the server then answers 401 and
    /// the normal auth-error path runs.
    #[must_use]
    pub fn headers(&self, scheme: AuthScheme) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match scheme {
            AuthScheme::Bearer => {
                insert(&mut headers, AUTHORIZATION, &format!("Bearer {}", self.token));
            }
            AuthScheme::BasicToken => {
                let credentials = STANDARD.encode(format!("{}:dummy", self.username));
                insert(&mut headers, AUTHORIZATION, &format!("Basic {credentials}"));
                insert(&mut headers, HeaderName::from_static(TOKEN_HEADER), &self.token);
            }
        }
        headers
    }
}

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(mut value) => {
            value.set_sensitive(true);
            headers.insert(name, value);
        }
        Err(error) => tracing::warn!(header = %name, %error, "skipping invalid auth header"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session {
            username: "admin".into(),
            token: "tok-123".into(),
            repository_id: "bedroom".into(),
            is_admin: true,
        }
    }

    #[test]
    fn bearer_scheme_sets_authorization_only() {
        let headers = session().headers(AuthScheme::Bearer);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok-123");
        assert!(headers.get(TOKEN_HEADER).is_none());
    }

    #[test]
    fn basic_token_scheme_matches_legacy_browser_client() {
        let headers = session().headers(AuthScheme::BasicToken);
        // base64("admin:dummy")
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic YWRtaW46ZHVtbXk=");
        assert_eq!(headers.get(TOKEN_HEADER).unwrap(), "tok-123");
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let json = serde_json::to_value(session()).unwrap();
        assert_eq!(json["repositoryId"], "bedroom");
        assert_eq!(json["isAdmin"], true);

        let legacy: Session = serde_json::from_str(
            r#"{"username":"u","token":"t","repositoryId":"r"}"#,
        )
        .unwrap();
        assert!(!legacy.is_admin);
    }
}
