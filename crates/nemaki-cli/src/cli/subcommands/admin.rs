use clap::{Args, Subcommand};

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users of the repository.
    List,
}

/// Group commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupCommands {
    /// List groups of the repository.
    List,
}

/// Webhook commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WebhookCommands {
    /// Show recent deliveries.
    Deliveries(DeliveriesArgs),
    /// Ask the server to redeliver one event.
    Retry {
        /// Delivery id.
        id: String,
    },
    /// Send a test payload to a URL.
    Test {
        /// Webhook URL.
        url: String,
        /// Signing secret.
        #[arg(long)]
        secret: Option<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct DeliveriesArgs {
    /// Only deliveries for this object.
    #[arg(long)]
    pub object: Option<String>,
    /// Entries to fetch (1-100).
    #[arg(long, default_value_t = nemaki_client::webhook::DEFAULT_DELIVERY_LIMIT)]
    pub limit: u32,
}

/// Audit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// Show counters and rates.
    Metrics,
    /// Reset counters.
    Reset,
    /// Print counters in Prometheus text format.
    Prometheus,
}

/// Filesystem import/export commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FsCommands {
    /// Import a server-side directory into a folder.
    Import {
        /// Destination folder id.
        folder: String,
        /// Directory on the server.
        path: String,
    },
    /// Export a folder to a server-side directory.
    Export {
        /// Source folder id.
        folder: String,
        /// Directory on the server.
        path: String,
        /// Overwrite existing files.
        #[arg(long)]
        overwrite: bool,
    },
}
