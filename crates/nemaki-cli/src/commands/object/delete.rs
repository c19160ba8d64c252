use std::fmt;

use nemaki_cascade::{BulkOutcome, CascadePlan, RootOutcome};
use serde::Serialize;

use crate::cli::subcommands::object::DeleteArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{note, output};
use crate::progress::Progress;

/// Returned when at least one root survived a delete; `main` maps it to a
/// distinct exit code after the report has been printed.
#[derive(Debug)]
pub struct DeleteFailures {
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for DeleteFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} object(s) could not be deleted", self.failed, self.total)
    }
}

impl std::error::Error for DeleteFailures {}

#[derive(Serialize)]
struct PlanSummary {
    root_id: String,
    objects: usize,
    descendant_ids: Vec<String>,
    has_cycles: bool,
    lookup_failures: Vec<String>,
}

impl From<CascadePlan> for PlanSummary {
    fn from(plan: CascadePlan) -> Self {
        Self {
            objects: plan.object_count(),
            root_id: plan.root_id,
            descendant_ids: plan.descendant_ids,
            has_cycles: plan.has_cycles,
            lookup_failures: plan.lookup_failures,
        }
    }
}

#[derive(Serialize)]
struct OutcomeRow<'a> {
    root_id: &'a str,
    status: &'a str,
    descendants_deleted: usize,
    descendants_failed: usize,
    error: Option<&'a str>,
}

impl<'a> From<&'a RootOutcome> for OutcomeRow<'a> {
    fn from(outcome: &'a RootOutcome) -> Self {
        Self {
            root_id: &outcome.root_id,
            status: outcome.status.as_str(),
            descendants_deleted: outcome.descendant_deleted_count,
            descendants_failed: outcome.descendant_failed_ids.len(),
            error: outcome.error.as_deref(),
        }
    }
}

/// Handle `nmk object delete`.
pub async fn handle(args: &DeleteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resolver = ctx.cascade();

    if args.dry_run {
        let mut plans = Vec::with_capacity(args.ids.len());
        for id in &args.ids {
            plans.push(PlanSummary::from(resolver.plan(id).await?));
        }
        let objects: usize = plans.iter().map(|plan| plan.objects).sum();
        note(&format!("would delete {objects} object(s)"), flags.quiet);
        return output(&plans, flags.format);
    }

    let label = format!("deleting {} object(s)", args.ids.len());
    let progress = Progress::spinner(&label);
    let bulk = resolver.delete_bulk(&args.ids).await;
    progress.finish_clear();

    report(&bulk, flags)?;
    if bulk.has_failures() {
        return Err(DeleteFailures {
            failed: bulk.failed_count,
            total: bulk.total(),
        }
        .into());
    }
    Ok(())
}

fn report(bulk: &BulkOutcome, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        let rows: Vec<OutcomeRow<'_>> = bulk.results.iter().map(OutcomeRow::from).collect();
        output(&rows, flags.format)?;
    } else {
        output(bulk, flags.format)?;
    }
    note(&bulk.message(), flags.quiet);
    Ok(())
}
