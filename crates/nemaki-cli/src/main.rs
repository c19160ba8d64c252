use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

use commands::object::DeleteFailures;

/// Exit code when a bulk delete left at least one root in place.
const EXIT_PARTIAL: i32 = 2;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("nmk error: {error:#}");
        if needs_login_hint(&error) {
            eprintln!("hint: run `nmk auth login` to start a new session");
        }
        let code = if error.downcast_ref::<DeleteFailures>().is_some() {
            EXIT_PARTIAL
        } else {
            1
        };
        std::process::exit(code);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    let ctx = context::AppContext::init(config, &flags)?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NEMAKI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Whether the error chain carries an auth failure: a rejected session or
/// a command that needs one.
fn needs_login_hint(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<nemaki_client::ClientError>()
            .is_some_and(|e| e.auth_failure().is_some())
            || cause
                .downcast_ref::<nemaki_auth::AuthError>()
                .is_some_and(|e| matches!(e, nemaki_auth::AuthError::NotAuthenticated))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nemaki_auth::AuthFailure;
    use nemaki_client::ClientError;

    #[test]
    fn hint_for_rejected_session_behind_context() {
        let error = anyhow::Error::from(ClientError::Auth(AuthFailure::Unauthorized))
            .context("listing users");
        assert!(needs_login_hint(&error));
    }

    #[test]
    fn hint_for_missing_session() {
        assert!(needs_login_hint(&anyhow::Error::from(
            nemaki_auth::AuthError::NotAuthenticated
        )));
    }

    #[test]
    fn no_hint_for_other_failures() {
        assert!(!needs_login_hint(&anyhow::Error::from(
            nemaki_auth::AuthError::AdminRequired
        )));
        assert!(!needs_login_hint(&anyhow::anyhow!("connection refused")));
    }
}
