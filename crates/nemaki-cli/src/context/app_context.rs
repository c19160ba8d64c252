use std::sync::Arc;

use anyhow::Context;
use nemaki_auth::{SessionContext, SessionStore};
use nemaki_cascade::CascadeResolver;
use nemaki_client::CmisClient;
use nemaki_config::NemakiConfig;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: NemakiConfig,
    pub session: Arc<SessionContext>,
    pub client: CmisClient,
}

impl AppContext {
    /// Restore the stored session and build the client for the selected
    /// repository.
    pub fn init(config: NemakiConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let session = Arc::new(SessionContext::restore(
            SessionStore::system(),
            config.auth.scheme,
        ));
        session.set_listener(Arc::new(|failure| {
            eprintln!("nmk: server rejected the session ({failure}); stored session cleared");
        }));

        let repository_id = resolve_repository(
            flags.repository.as_deref(),
            session.current().map(|s| s.repository_id).as_deref(),
            &config.repository.default_id,
        );
        tracing::debug!(%repository_id, server = %config.server.normalized_base_url(), "app context");

        let client = CmisClient::new(&config, repository_id, Arc::clone(&session))
            .context("failed to build HTTP client")?;

        Ok(Self {
            config,
            session,
            client,
        })
    }

    /// Cascade resolver over this context's client.
    #[must_use]
    pub fn cascade(&self) -> CascadeResolver<CmisClient> {
        CascadeResolver::new(self.client.clone(), self.config.cascade.clone())
    }

    /// Page size when a command does not set one.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

/// Precedence: `--repository`, then the session's repository, then config.
fn resolve_repository(flag: Option<&str>, session: Option<&str>, configured: &str) -> String {
    flag.or(session)
        .filter(|id| !id.trim().is_empty())
        .unwrap_or(configured)
        .to_string()
}
