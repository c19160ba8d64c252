//! Server connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("nemaki-toolkit/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Scheme + host (+ port) of the NemakiWare server, without `/core`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is not an
    /// `http(s)://` URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.normalized_base_url();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let host = url.split("://").nth(1).unwrap_or("");
        if !has_scheme || host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.base_url".into(),
                reason: format!("expected http(s)://host, got '{}'", self.base_url),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_server() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ServerConfig {
            base_url: "https://dms.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.normalized_base_url(), "https://dms.example.com");
    }

    #[test]
    fn rejects_url_without_scheme() {
        let config = ServerConfig {
            base_url: "dms.example.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
