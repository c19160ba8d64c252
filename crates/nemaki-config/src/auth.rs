//! Authentication header settings.

use serde::{Deserialize, Serialize};

/// How the session token is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`.
    #[default]
    Bearer,
    /// `Authorization: Basic base64(user:dummy)` plus `nemaki_auth_token`,
    /// for servers that only accept the legacy token header.
    BasicToken,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub scheme: AuthScheme,
}
