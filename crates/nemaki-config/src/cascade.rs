//! Cascade delete settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_relationship_type() -> String {
    "nemaki:parentChildRelationship".to_string()
}

const fn default_concurrency() -> usize {
    3
}

const fn default_fail_open() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CascadeConfig {
    /// Relationship type whose targets are deleted together with the source.
    #[serde(default = "default_relationship_type")]
    pub relationship_type: String,

    /// Root deletion pipelines in flight during a bulk delete.
    #[serde(default = "default_concurrency")]
    pub root_concurrency: usize,

    /// Descendant deletions in flight per root.
    #[serde(default = "default_concurrency")]
    pub descendant_concurrency: usize,

    /// Treat a failed relationship lookup as "no descendants" instead of
    /// aborting the cascade for that root.
    #[serde(default = "default_fail_open")]
    pub fail_open_discovery: bool,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            relationship_type: default_relationship_type(),
            root_concurrency: default_concurrency(),
            descendant_concurrency: default_concurrency(),
            fail_open_discovery: default_fail_open(),
        }
    }
}

impl CascadeConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero concurrency limit or
    /// an empty relationship type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cascade.root_concurrency".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.descendant_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cascade.descendant_concurrency".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.relationship_type.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cascade.relationship_type".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_conventions() {
        let config = CascadeConfig::default();
        assert_eq!(config.relationship_type, "nemaki:parentChildRelationship");
        assert_eq!(config.root_concurrency, 3);
        assert_eq!(config.descendant_concurrency, 3);
        assert!(config.fail_open_discovery);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let config = CascadeConfig {
            root_concurrency: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
