use clap::Subcommand;

/// Repository commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RepoCommands {
    /// List repositories hosted by the server.
    List,
}

/// ACL commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AclCommands {
    /// Show the access control list of an object.
    Get {
        /// Object id.
        id: String,
    },
}
