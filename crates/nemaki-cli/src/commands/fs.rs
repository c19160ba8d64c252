use nemaki_client::transfer::TransferReport;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FsCommands;
use crate::context::AppContext;
use crate::output::{note, output};
use crate::progress::Progress;

/// Handle `nmk fs` (admin only).
pub async fn handle(action: &FsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require_admin()?;
    let report = match action {
        FsCommands::Import { folder, path } => {
            Progress::wrap("importing", ctx.client.filesystem_import(folder, path)).await?
        }
        FsCommands::Export {
            folder,
            path,
            overwrite,
        } => {
            Progress::wrap(
                "exporting",
                ctx.client.filesystem_export(folder, path, *overwrite),
            )
            .await?
        }
    };
    if !report.is_complete() {
        note(&incomplete_note(&report), flags.quiet);
    }
    output(&report, flags.format)
}

fn incomplete_note(report: &TransferReport) -> String {
    format!(
        "transfer finished with status '{}': {} error(s), {} warning(s)",
        report.status,
        report.errors.len(),
        report.warnings.len()
    )
}
