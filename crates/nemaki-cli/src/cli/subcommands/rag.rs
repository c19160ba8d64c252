use clap::{Args, Subcommand};

/// Semantic search commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RagCommands {
    /// Show whether semantic search is enabled and indexed.
    Health,
    /// Search documents by meaning.
    Search(RagSearchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RagSearchArgs {
    /// Natural-language query.
    pub query: String,
    /// Maximum hits.
    #[arg(long)]
    pub top_k: Option<u32>,
    /// Minimum similarity score (0.0 - 1.0).
    #[arg(long)]
    pub min_score: Option<f32>,
    /// Restrict to one folder.
    #[arg(long)]
    pub folder: Option<String>,
}
