use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AclCommands, AuditCommands, AuthCommands, FsCommands, GroupCommands, ObjectCommands,
    RagCommands, RelationshipCommands, RepoCommands, UserCommands, VersionCommands,
    WebhookCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Repositories hosted by the server.
    Repo {
        #[command(subcommand)]
        action: RepoCommands,
    },
    /// Browse, create, update and delete objects.
    Object {
        #[command(subcommand)]
        action: ObjectCommands,
    },
    /// Run a CMIS SQL query.
    Query(QueryArgs),
    /// Check-out, check-in and version history.
    Version {
        #[command(subcommand)]
        action: VersionCommands,
    },
    /// Relationships between objects.
    Relationship {
        #[command(subcommand)]
        action: RelationshipCommands,
    },
    /// Access control lists.
    Acl {
        #[command(subcommand)]
        action: AclCommands,
    },
    /// Users (admin).
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Groups (admin).
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// Webhook delivery log (admin).
    Webhook {
        #[command(subcommand)]
        action: WebhookCommands,
    },
    /// Audit metrics (admin).
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Semantic search.
    Rag {
        #[command(subcommand)]
        action: RagCommands,
    },
    /// Server-side filesystem import and export (admin).
    Fs {
        #[command(subcommand)]
        action: FsCommands,
    },
}

/// Arguments for `nmk query`.
#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    /// CMIS SQL statement, e.g. "SELECT * FROM cmis:document".
    pub statement: String,
    /// Page size (defaults to `general.default_limit`).
    #[arg(long)]
    pub max_items: Option<u32>,
    /// Results to skip.
    #[arg(long, default_value_t = 0)]
    pub skip: u32,
}
