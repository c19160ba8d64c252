mod delete;
mod read;
mod write;

pub use delete::DeleteFailures;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ObjectCommands;
use crate::context::AppContext;

/// Handle `nmk object <subcommand>`.
pub async fn handle(action: &ObjectCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require()?;
    match action {
        ObjectCommands::Root => read::root(ctx, flags).await,
        ObjectCommands::Get { id } => read::get(id, ctx, flags).await,
        ObjectCommands::GetPath { path } => read::get_path(path, ctx, flags).await,
        ObjectCommands::Children(args) => read::children(args, ctx, flags).await,
        ObjectCommands::Parents { id } => read::parents(id, ctx, flags).await,
        ObjectCommands::Download(args) => read::download(args, ctx, flags).await,
        ObjectCommands::Mkdir(args) => write::mkdir(args, ctx, flags).await,
        ObjectCommands::Upload(args) => write::upload(args, ctx, flags).await,
        ObjectCommands::Update(args) => write::update(args, ctx, flags).await,
        ObjectCommands::Secondary(args) => write::secondary(args, ctx, flags).await,
        ObjectCommands::DeleteTree { id } => write::delete_tree(id, ctx, flags).await,
        ObjectCommands::Delete(args) => delete::handle(args, ctx, flags).await,
    }
}
