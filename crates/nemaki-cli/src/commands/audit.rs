use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuditResetResponse {
    reset: bool,
}

/// Handle `nmk audit` (admin only).
pub async fn handle(action: &AuditCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require_admin()?;
    match action {
        AuditCommands::Metrics => output(&ctx.client.audit_metrics().await?, flags.format),
        AuditCommands::Reset => match ctx.client.reset_audit_metrics().await? {
            Some(metrics) => output(&metrics, flags.format),
            None => output(&AuditResetResponse { reset: true }, flags.format),
        },
        AuditCommands::Prometheus => {
            print!("{}", ctx.client.audit_prometheus().await?);
            Ok(())
        }
    }
}
