//! `nmk user` and `nmk group` (admin only).

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{GroupCommands, UserCommands};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle_users(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.require_admin()?;
    match action {
        UserCommands::List => output(&ctx.client.list_users().await?, flags.format),
    }
}

pub async fn handle_groups(
    action: &GroupCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.require_admin()?;
    match action {
        GroupCommands::List => output(&ctx.client.list_groups().await?, flags.format),
    }
}
