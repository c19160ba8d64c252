use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::parse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: String,
    repository: String,
    admin: bool,
    stored_in: Option<&'static str>,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = parse::password(args.password.as_deref())?;
    let session = ctx
        .session
        .login(
            ctx.client.http(),
            ctx.client.base_url(),
            &args.username,
            &password,
            ctx.client.repository_id(),
        )
        .await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            username: session.username,
            repository: session.repository_id,
            admin: session.is_admin,
            stored_in: ctx.session.store().detect_source(),
        },
        flags.format,
    )
}
