use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::object::{ChildrenArgs, DownloadArgs};
use crate::commands::shared::rows::{Page, object_rows};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct DownloadResponse {
    id: String,
    path: String,
    bytes: usize,
    mime_type: Option<String>,
}

pub async fn root(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.client.get_root_folder().await?, flags.format)
}

pub async fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.client.get_object(id).await?, flags.format)
}

pub async fn get_path(path: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.client.get_object_by_path(path).await?, flags.format)
}

pub async fn children(args: &ChildrenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let max_items = args.max_items.unwrap_or_else(|| ctx.default_limit());
    let page = ctx.client.get_children(&args.id, max_items, args.skip).await?;
    output(
        &Page {
            items: object_rows(&page.objects),
            has_more_items: page.has_more_items,
            num_items: page.num_items,
        },
        flags.format,
    )
}

pub async fn parents(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let parents = ctx.client.get_parents(id).await?;
    output(&object_rows(&parents), flags.format)
}

pub async fn download(args: &DownloadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let content = Progress::wrap("downloading", ctx.client.get_content(&args.id)).await?;
    std::fs::write(&args.output, &content.data)
        .with_context(|| format!("failed to write {}", args.output))?;
    output(
        &DownloadResponse {
            id: args.id.clone(),
            path: args.output.clone(),
            bytes: content.data.len(),
            mime_type: content.mime_type,
        },
        flags.format,
    )
}
