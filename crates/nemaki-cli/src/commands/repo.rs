use crate::cli::GlobalFlags;
use crate::cli::subcommands::RepoCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nmk repo`. Works without a session.
pub async fn handle(action: &RepoCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RepoCommands::List => output(&ctx.client.list_repositories().await?, flags.format),
    }
}
