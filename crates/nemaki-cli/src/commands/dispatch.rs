use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Repo { action } => commands::repo::handle(&action, ctx, flags).await,
        Commands::Object { action } => commands::object::handle(&action, ctx, flags).await,
        Commands::Query(args) => commands::query::handle(&args, ctx, flags).await,
        Commands::Version { action } => commands::version::handle(&action, ctx, flags).await,
        Commands::Relationship { action } => {
            commands::relationship::handle(&action, ctx, flags).await
        }
        Commands::Acl { action } => commands::acl::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::principal::handle_users(&action, ctx, flags).await,
        Commands::Group { action } => commands::principal::handle_groups(&action, ctx, flags).await,
        Commands::Webhook { action } => commands::webhook::handle(&action, ctx, flags).await,
        Commands::Audit { action } => commands::audit::handle(&action, ctx, flags).await,
        Commands::Rag { action } => commands::rag::handle(&action, ctx, flags).await,
        Commands::Fs { action } => commands::fs::handle(&action, ctx, flags).await,
    }
}
