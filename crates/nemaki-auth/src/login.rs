//! Token login and logout against the NemakiWare auth API.

use serde::{Deserialize, Serialize};

use crate::context::SessionContext;
use crate::error::AuthError;
use crate::session::Session;

const LOGIN_PATH: &str = "/core/api/v1/cmis/auth/login";
const LOGOUT_PATH: &str = "/core/api/v1/cmis/auth/logout";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    user_id: &'a str,
    password: &'a str,
    repository_id: &'a str,
}

/// Token grant returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    pub token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the token expires, if the server reports it.
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub repository_id: Option<String>,
}

impl LoginGrant {
    /// Session record for this grant. Server-reported ids win over the
    /// ones the caller asked for.
    #[must_use]
    pub fn into_session(self, username: &str, repository_id: &str) -> Session {
        Session {
            username: self.user_id.unwrap_or_else(|| username.to_string()),
            token: self.token,
            repository_id: self
                .repository_id
                .unwrap_or_else(|| repository_id.to_string()),
            is_admin: self.is_admin,
        }
    }
}

/// Exchange credentials for a token.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] on 401/403, [`AuthError::LoginFailed`]
/// for any other non-2xx or a grant without a token, [`AuthError::Http`]
/// for transport failures.
pub async fn request_token(
    http: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
    repository_id: &str,
) -> Result<LoginGrant, AuthError> {
    let url = format!("{base_url}{LOGIN_PATH}");
    tracing::debug!(%url, user = username, repository = repository_id, "login");

    let resp = http
        .post(&url)
        .json(&LoginRequest {
            user_id: username,
            password,
            repository_id,
        })
        .send()
        .await?;

    let status = resp.status();
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(AuthError::InvalidCredentials);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::LoginFailed {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        });
    }

    let grant: LoginGrant = resp.json().await?;
    if grant.token.is_empty() {
        return Err(AuthError::LoginFailed {
            status: status.as_u16(),
            message: "response did not contain a token".into(),
        });
    }
    Ok(grant)
}

impl SessionContext {
    /// Log in and install the resulting session.
    ///
    /// # Errors
    ///
    /// See [`request_token`]; also [`AuthError::StoreError`] if the session
    /// cannot be persisted.
    pub async fn login(
        &self,
        http: &reqwest::Client,
        base_url: &str,
        username: &str,
        password: &str,
        repository_id: &str,
    ) -> Result<Session, AuthError> {
        let grant = request_token(http, base_url, username, password, repository_id).await?;
        let session = grant.into_session(username, repository_id);
        self.establish(session.clone())?;
        tracing::info!(user = %session.username, admin = session.is_admin, "logged in");
        Ok(session)
    }

    /// Tell the server to drop the token, then clear local state.
    ///
    /// The remote call is best-effort: failures are logged and local state
    /// is cleared regardless.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if the stored record cannot be removed.
    pub async fn logout(&self, http: &reqwest::Client, base_url: &str) -> Result<(), AuthError> {
        if self.is_authenticated() {
            let url = format!("{base_url}{LOGOUT_PATH}");
            match http.post(&url).headers(self.headers()).send().await {
                Ok(resp) if resp.status().is_success() => {}
                Ok(resp) => {
                    tracing::warn!(status = resp.status().as_u16(), "server logout rejected");
                }
                Err(error) => tracing::warn!(%error, "server logout failed"),
            }
        }
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grant_prefers_server_ids() {
        let grant: LoginGrant = serde_json::from_str(
            r#"{"token":"t","userId":"Admin","isAdmin":true,"repositoryId":"canopy"}"#,
        )
        .unwrap();
        let session = grant.into_session("admin", "bedroom");
        assert_eq!(session.username, "Admin");
        assert_eq!(session.repository_id, "canopy");
        assert!(session.is_admin);
    }

    #[test]
    fn grant_falls_back_to_requested_ids() {
        let grant: LoginGrant = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        let session = grant.into_session("alice", "bedroom");
        assert_eq!(session.username, "alice");
        assert_eq!(session.repository_id, "bedroom");
        assert!(!session.is_admin);
    }
}
