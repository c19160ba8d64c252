use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in and store the session.
    Login(AuthLoginArgs),
    /// Revoke the token and clear the stored session.
    Logout,
    /// Show the current session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// User name.
    #[arg(long)]
    pub username: String,
    /// Password. Falls back to `NEMAKI_PASSWORD`, then one line of stdin.
    #[arg(long)]
    pub password: Option<String>,
}
