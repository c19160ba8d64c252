//! # nemaki-config
//!
//! Layered configuration loading for the NemakiWare toolkit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEMAKI_*` prefix, `__` as separator)
//! 2. Project-level `.nemaki/config.toml`
//! 3. User-level `~/.config/nemaki/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `NEMAKI_SERVER__BASE_URL` -> `server.base_url`,
//! `NEMAKI_CASCADE__ROOT_CONCURRENCY` -> `cascade.root_concurrency`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nemaki_config::NemakiConfig;
//!
//! let config = NemakiConfig::load_with_dotenv().expect("config");
//! println!("server: {}", config.server.normalized_base_url());
//! ```

mod auth;
mod cascade;
mod error;
mod general;
mod repository;
mod server;

pub use auth::{AuthConfig, AuthScheme};
pub use cascade::CascadeConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use repository::RepositoryConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "NEMAKI_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NemakiConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub cascade: CascadeConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NemakiConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of
    /// range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment. Tests use this to layer
    /// providers on top of [`Self::figment`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".nemaki/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.general.validate()?;
        self.cascade.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nemaki").join("config.toml"))
    }
}
