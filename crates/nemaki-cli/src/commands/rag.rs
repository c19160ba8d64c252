use nemaki_core::rag::RagSearchRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RagCommands;
use crate::cli::subcommands::rag::RagSearchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `nmk rag`.
pub async fn handle(action: &RagCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.require()?;
    match action {
        RagCommands::Health => output(&ctx.client.rag_health().await?, flags.format),
        RagCommands::Search(args) => {
            let request = search_request(args)?;
            let response = Progress::wrap("searching", ctx.client.rag_search(&request)).await?;
            output(&response.results, flags.format)
        }
    }
}

fn search_request(args: &RagSearchArgs) -> anyhow::Result<RagSearchRequest> {
    if let Some(score) = args.min_score
        && !(0.0..=1.0).contains(&score)
    {
        anyhow::bail!("--min-score must be between 0.0 and 1.0, got {score}");
    }
    let mut request = RagSearchRequest::new(args.query.clone());
    request.top_k = args.top_k;
    request.min_score = args.min_score;
    request.folder_id.clone_from(&args.folder);
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(min_score: Option<f32>) -> RagSearchArgs {
        RagSearchArgs {
            query: "renewal terms".into(),
            top_k: Some(5),
            min_score,
            folder: Some("f-1".into()),
        }
    }

    #[test]
    fn builds_request_from_flags() {
        let request = search_request(&args(Some(0.5))).unwrap();
        assert_eq!(request.top_k, Some(5));
        assert_eq!(request.folder_id.as_deref(), Some("f-1"));
    }

    #[test]
    fn rejects_out_of_range_score() {
        assert!(search_request(&args(Some(1.5))).is_err());
    }
}
