use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session
        .logout(ctx.client.http(), ctx.client.base_url())
        .await?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
