use crate::cli::GlobalFlags;
use crate::cli::subcommands::AclCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nmk acl`.
pub async fn handle(action: &AclCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require()?;
    match action {
        AclCommands::Get { id } => output(&ctx.client.get_acl(id).await?, flags.format),
    }
}
