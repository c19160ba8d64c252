//! # nemaki-client
//!
//! HTTP clients for a NemakiWare server.
//!
//! - CMIS Browser Binding (`/core/browser/{repo}`): navigation, object
//!   mutations, versioning, relationships, query
//! - NemakiWare REST (`/core/rest`): repositories, ACLs, users and groups,
//!   filesystem import/export, webhook delivery log, audit metrics
//! - Semantic search (`/core/api/v1/cmis/repositories/{repo}/rag`)
//!
//! Every call attaches the shared session's headers and routes 401/403
//! through [`SessionContext::handle_auth_error`].

pub mod audit;
pub mod form;
pub mod navigation;
pub mod objects;
pub mod rag;
pub mod rest;
pub mod transfer;
pub mod versioning;
pub mod webhook;

mod error;
mod http;

use std::sync::Arc;
use std::time::Duration;

use nemaki_auth::SessionContext;
use nemaki_config::NemakiConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

pub use error::ClientError;
pub use form::{AbsentValues, BrowserForm, parse_assignments};
pub use http::extract_error_message;
pub use objects::Upload;

// ── Client ─────────────────────────────────────────────────────────

/// Client bound to one server and repository.
#[derive(Debug, Clone)]
pub struct CmisClient {
    http: reqwest::Client,
    base_url: String,
    repository_id: String,
    session: Arc<SessionContext>,
}

impl CmisClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        config: &NemakiConfig,
        repository_id: impl Into<String>,
        session: Arc<SessionContext>,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.server.user_agent.clone());
        if config.server.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.server.timeout_secs));
        }
        Ok(Self::with_http(
            builder.build()?,
            config.server.normalized_base_url(),
            repository_id,
            session,
        ))
    }

    /// Client over an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http(
        http: reqwest::Client,
        base_url: &str,
        repository_id: impl Into<String>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            repository_id: repository_id.into(),
            session,
        }
    }

    #[must_use]
    pub fn repository_id(&self) -> &str {
        &self.repository_id
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    #[must_use]
    pub const fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    // ── URLs ───────────────────────────────────────────────────────

    fn browser_url(&self) -> String {
        format!(
            "{}/core/browser/{}",
            self.base_url,
            urlencoding::encode(&self.repository_id)
        )
    }

    /// `GET {browser}/root?cmisselector=...&objectId=...` with extra params.
    fn selector_url(&self, selector: &str, object_id: Option<&str>, params: &[(&str, String)]) -> String {
        let mut url = format!("{}/root?cmisselector={selector}&succinct=true", self.browser_url());
        if let Some(id) = object_id {
            url.push_str("&objectId=");
            url.push_str(&urlencoding::encode(id));
        }
        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    fn rest_repo_url(&self, path: &str) -> String {
        format!(
            "{}/core/rest/repo/{}/{path}",
            self.base_url,
            urlencoding::encode(&self.repository_id)
        )
    }

    fn rest_all_url(&self, path: &str) -> String {
        format!("{}/core/rest/all/{path}", self.base_url)
    }

    fn api_repo_url(&self, path: &str) -> String {
        format!(
            "{}/core/api/v1/cmis/repositories/{}/{path}",
            self.base_url,
            urlencoding::encode(&self.repository_id)
        )
    }

    // ── Transport ──────────────────────────────────────────────────

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let resp = request.headers(self.session.headers()).send().await?;
        http::check_response(resp, &self.session).await
    }

    async fn get_json(&self, url: &str) -> Result<Value, ClientError> {
        tracing::debug!(%url, "GET");
        let resp = self
            .send(self.http.get(url).header(ACCEPT, "application/json"))
            .await?;
        parse_json(resp).await
    }

    /// POST a url-encoded Browser Binding form.
    async fn post_form(&self, form: &BrowserForm) -> Result<reqwest::Response, ClientError> {
        let url = self.browser_url();
        tracing::debug!(%url, action = form.fields().first().map_or("", |(_, v)| v.as_str()), "POST");
        self.send(
            self.http
                .post(&url)
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(form.encode()),
        )
        .await
    }

    async fn post_multipart(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<reqwest::Response, ClientError> {
        let url = self.browser_url();
        tracing::debug!(%url, "POST multipart");
        self.send(
            self.http
                .post(&url)
                .header(ACCEPT, "application/json")
                .multipart(form),
        )
        .await
    }
}

/// Decode a JSON body. An empty body decodes as `null`.
async fn parse_json(resp: reqwest::Response) -> Result<Value, ClientError> {
    let text = resp.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use nemaki_auth::SessionStore;
    use nemaki_config::AuthScheme;

    use super::*;

    fn client() -> CmisClient {
        CmisClient::with_http(
            reqwest::Client::new(),
            "http://localhost:8080/",
            "bed room",
            Arc::new(SessionContext::new(SessionStore::ephemeral(), AuthScheme::Bearer)),
        )
    }

    #[test]
    fn urls_encode_repository_and_params() {
        let client = client();
        assert_eq!(client.browser_url(), "http://localhost:8080/core/browser/bed%20room");
        assert_eq!(
            client.selector_url("children", Some("a/b"), &[("maxItems", "10".to_string())]),
            "http://localhost:8080/core/browser/bed%20room/root?cmisselector=children&succinct=true&objectId=a%2Fb&maxItems=10"
        );
        assert_eq!(
            client.rest_repo_url("user/list"),
            "http://localhost:8080/core/rest/repo/bed%20room/user/list"
        );
    }

    #[test]
    fn builds_from_default_config() {
        let session = Arc::new(SessionContext::new(SessionStore::ephemeral(), AuthScheme::Bearer));
        let client = CmisClient::new(&NemakiConfig::default(), "bedroom", session).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.repository_id(), "bedroom");
    }
}
