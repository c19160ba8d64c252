use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    username: Option<String>,
    repository: String,
    admin: bool,
    server: String,
    source: Option<&'static str>,
}

/// Local view only: the token is not checked against the server.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.current();
    let status = AuthStatusResponse {
        authenticated: session.is_some(),
        admin: session.as_ref().is_some_and(|s| s.is_admin),
        username: session.map(|s| s.username),
        repository: ctx.client.repository_id().to_string(),
        server: ctx.client.base_url().to_string(),
        source: ctx.session.store().detect_source(),
    };
    output(&status, flags.format)
}
