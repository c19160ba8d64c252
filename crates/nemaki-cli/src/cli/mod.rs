use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `nmk` binary.
#[derive(Debug, Parser)]
#[command(name = "nmk", version, about = "nmk - NemakiWare repository administration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository id (defaults to the session's, then `repository.default_id`)
    #[arg(short, long, global = true)]
    pub repository: Option<String>,

    /// Server base URL, e.g. http://localhost:8080
    #[arg(short, long, global = true)]
    pub server: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            repository: self.repository.clone(),
            server: self.server.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, ObjectCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "nmk",
            "--format",
            "json",
            "--repository",
            "canopy",
            "--verbose",
            "repo",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.repository.as_deref(), Some("canopy"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Repo { .. }));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["nmk", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["nmk", "--format", "xml", "repo", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn delete_accepts_many_ids_and_dry_run() {
        let cli = Cli::try_parse_from(["nmk", "object", "delete", "a", "b", "c", "--dry-run"])
            .expect("cli should parse");
        match cli.command {
            Commands::Object {
                action: ObjectCommands::Delete(args),
            } => {
                assert_eq!(args.ids, vec!["a", "b", "c"]);
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn delete_requires_an_id() {
        assert!(Cli::try_parse_from(["nmk", "object", "delete"]).is_err());
    }

    #[test]
    fn update_collects_repeated_assignments() {
        let cli = Cli::try_parse_from([
            "nmk",
            "object",
            "update",
            "doc-1",
            "--set",
            "cmis:name=a.txt",
            "--set",
            "tags=[x,y]",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Object {
                action: ObjectCommands::Update(args),
            } => assert_eq!(args.set.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
