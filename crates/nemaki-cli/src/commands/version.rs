use std::path::Path;

use anyhow::Context;
use nemaki_client::Upload;
use nemaki_client::versioning::CheckIn;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VersionCommands;
use crate::commands::shared::parse;
use crate::commands::shared::rows::object_rows;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CancelResponse {
    cancelled: String,
}

/// Handle `nmk version`.
pub async fn handle(action: &VersionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require()?;
    match action {
        VersionCommands::Checkout { id } => output(&ctx.client.check_out(id).await?, flags.format),
        VersionCommands::Checkin(args) => {
            let content = args.file.as_deref().map(read_upload).transpose()?;
            let options = CheckIn {
                major: args.major,
                comment: args.comment.clone(),
                content,
            };
            output(&ctx.client.check_in(&args.id, options).await?, flags.format)
        }
        VersionCommands::Cancel { id } => {
            ctx.client.cancel_check_out(id).await?;
            output(&CancelResponse { cancelled: id.clone() }, flags.format)
        }
        VersionCommands::History { id } => {
            let versions = ctx.client.get_all_versions(id).await?;
            output(&object_rows(&versions), flags.format)
        }
    }
}

/// Read a local file into an upload named after it.
pub fn read_upload(path: &str) -> anyhow::Result<Upload> {
    let path = Path::new(path);
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("upload path has no file name")?
        .to_string();
    Ok(Upload {
        mime_type: parse::mime_type(path).to_string(),
        file_name,
        data,
    })
}
