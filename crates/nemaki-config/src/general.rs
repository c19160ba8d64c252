//! Listing defaults shared by every command.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest page the CLI will request in one `maxItems`.
pub const MAX_PAGE_SIZE: u32 = 1000;

const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// `maxItems` for children listings and queries when `--max-items` is absent.
    #[serde(default = "default_page_size")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_page_size(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the page size is zero or
    /// above [`MAX_PAGE_SIZE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.default_limit) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_bounds() {
        assert!(GeneralConfig::default().validate().is_ok());
        assert!(GeneralConfig { default_limit: 0 }.validate().is_err());
        assert!(GeneralConfig { default_limit: MAX_PAGE_SIZE + 1 }.validate().is_err());
    }
}
