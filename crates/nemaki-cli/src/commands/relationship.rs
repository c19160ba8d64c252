use crate::cli::GlobalFlags;
use crate::cli::subcommands::RelationshipCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nmk relationship`.
pub async fn handle(
    action: &RelationshipCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.require()?;
    match action {
        RelationshipCommands::Create {
            source,
            target,
            type_id,
        } => {
            let created = ctx
                .client
                .create_relationship(source, target, type_id.as_deref())
                .await?;
            output(&created, flags.format)
        }
        RelationshipCommands::List { id } => {
            output(&ctx.client.get_relationships(id).await?, flags.format)
        }
    }
}
