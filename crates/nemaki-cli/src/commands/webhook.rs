use crate::cli::GlobalFlags;
use crate::cli::subcommands::WebhookCommands;
use crate::context::AppContext;
use crate::output::{note, output};

/// Handle `nmk webhook` (admin only).
pub async fn handle(action: &WebhookCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require_admin()?;
    match action {
        WebhookCommands::Deliveries(args) => {
            let deliveries = ctx
                .client
                .list_deliveries(args.object.as_deref(), args.limit)
                .await?;
            output(&deliveries, flags.format)
        }
        WebhookCommands::Retry { id } => {
            let outcome = ctx.client.retry_delivery(id).await?;
            if outcome.retry_status == "not_implemented" {
                note("server does not support manual redelivery yet", flags.quiet);
            }
            output(&outcome, flags.format)
        }
        WebhookCommands::Test { url, secret } => {
            let result = ctx.client.test_webhook(url, secret.as_deref()).await?;
            output(&result, flags.format)
        }
    }
}
