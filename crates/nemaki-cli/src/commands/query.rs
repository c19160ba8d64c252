use crate::cli::GlobalFlags;
use crate::cli::root_commands::QueryArgs;
use crate::commands::shared::rows::{Page, object_rows};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `nmk query`.
pub async fn handle(args: &QueryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require()?;
    let max_items = args.max_items.unwrap_or_else(|| ctx.default_limit());
    let page = Progress::wrap(
        "running query",
        ctx.client.query(&args.statement, max_items, args.skip),
    )
    .await?;

    output(
        &Page {
            items: object_rows(&page.objects),
            has_more_items: page.has_more_items,
            num_items: page.num_items,
        },
        flags.format,
    )
}
