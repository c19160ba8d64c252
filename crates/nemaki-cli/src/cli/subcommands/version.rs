use clap::{Args, Subcommand};

/// Versioning commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VersionCommands {
    /// Check out a document; prints the private working copy.
    Checkout {
        /// Document id.
        id: String,
    },
    /// Check in a private working copy.
    Checkin(CheckinArgs),
    /// Discard a private working copy.
    Cancel {
        /// Private working copy id.
        id: String,
    },
    /// List all versions of a document.
    History {
        /// Any version's id.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct CheckinArgs {
    /// Private working copy id.
    pub id: String,
    /// New content for the checked-in version.
    #[arg(long)]
    pub file: Option<String>,
    /// Create a major version.
    #[arg(long)]
    pub major: bool,
    /// Check-in comment.
    #[arg(long)]
    pub comment: Option<String>,
}
