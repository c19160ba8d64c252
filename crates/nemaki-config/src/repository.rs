//! Repository selection.

use serde::{Deserialize, Serialize};

fn default_repository_id() -> String {
    "bedroom".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepositoryConfig {
    /// Repository used when neither `--repository` nor the session names one.
    #[serde(default = "default_repository_id")]
    pub default_id: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            default_id: default_repository_id(),
        }
    }
}
