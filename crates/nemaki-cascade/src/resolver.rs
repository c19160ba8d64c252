//! Root-then-descendants deletion with bounded concurrency.

use futures::stream::{self, StreamExt};
use nemaki_config::CascadeConfig;

use crate::backend::CascadeBackend;
use crate::discovery::discover;
use crate::error::CascadeError;
use crate::outcome::{BulkOutcome, RootOutcome};
use crate::plan::CascadePlan;
use crate::stage::{Stage, StageTracker};

/// Deletes roots together with everything they reach over the configured
/// relationship type.
#[derive(Debug, Clone)]
pub struct CascadeResolver<B> {
    backend: B,
    config: CascadeConfig,
}

impl<B: CascadeBackend> CascadeResolver<B> {
    #[must_use]
    pub const fn new(backend: B, config: CascadeConfig) -> Self {
        Self { backend, config }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn config(&self) -> &CascadeConfig {
        &self.config
    }

    /// Discover descendants of `root_id` without deleting anything.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::Discovery`] when a lookup fails and discovery
    /// is not fail-open.
    pub async fn plan(&self, root_id: &str) -> Result<CascadePlan, CascadeError> {
        let found = discover(
            &self.backend,
            root_id,
            &self.config.relationship_type,
            self.config.fail_open_discovery,
        )
        .await?;
        Ok(CascadePlan::new(root_id, found))
    }

    /// Delete one root, then its distinct descendants.
    ///
    /// Every backend failure is captured in the outcome; this never aborts.
    pub async fn delete_one(&self, root_id: &str) -> RootOutcome {
        let mut tracker = StageTracker::new(root_id);
        match self.run(root_id, &mut tracker).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(root_id, stage = %tracker.stage(), error = %err, "cascade delete failed");
                RootOutcome::failed(root_id, err.to_string())
            }
        }
    }

    /// Delete several roots, at most `root_concurrency` at a time.
    pub async fn delete_bulk(&self, root_ids: &[String]) -> BulkOutcome {
        let results: Vec<RootOutcome> = stream::iter(root_ids)
            .map(|root_id| self.delete_one(root_id))
            .buffered(self.config.root_concurrency.max(1))
            .collect()
            .await;
        let outcome = BulkOutcome::from_results(results);
        tracing::info!(
            total = outcome.total(),
            success = outcome.success_count,
            partial = outcome.partial_count,
            failed = outcome.failed_count,
            descendant_failed = outcome.total_descendant_failed,
            "bulk delete finished"
        );
        outcome
    }

    async fn run(&self, root_id: &str, tracker: &mut StageTracker) -> Result<RootOutcome, CascadeError> {
        tracker.advance(Stage::DiscoveringDescendants)?;
        let found = match discover(
            &self.backend,
            root_id,
            &self.config.relationship_type,
            self.config.fail_open_discovery,
        )
        .await
        {
            Ok(found) => found,
            Err(err) => {
                tracker.advance(Stage::Failed)?;
                return Err(err);
            }
        };

        tracker.advance(Stage::DeletingRoot)?;
        if let Err(err) = self.delete_tolerating_missing(root_id).await {
            tracker.advance(Stage::Failed)?;
            return Err(err);
        }

        tracker.advance(Stage::DeletingDescendants)?;
        let failures: Vec<Option<String>> = stream::iter(&found.descendant_ids)
            .map(|id| async move {
                match self.delete_tolerating_missing(id).await {
                    Ok(()) => None,
                    Err(err) => {
                        tracing::warn!(root_id, descendant_id = %id, error = %err, "descendant delete failed");
                        Some(id.clone())
                    }
                }
            })
            .buffer_unordered(self.config.descendant_concurrency.max(1))
            .collect()
            .await;

        let mut descendant_failed_ids: Vec<String> = failures.into_iter().flatten().collect();
        descendant_failed_ids.sort();
        let descendant_deleted_count = found.descendant_ids.len() - descendant_failed_ids.len();

        let status = if descendant_failed_ids.is_empty() {
            Stage::Success
        } else {
            Stage::PartialSuccess
        };
        tracker.advance(status)?;

        Ok(RootOutcome {
            root_id: root_id.to_string(),
            root_deleted: true,
            descendant_deleted_count,
            descendant_failed_ids,
            status,
            error: None,
        })
    }

    /// A 404 means someone else already removed the object.
    async fn delete_tolerating_missing(&self, object_id: &str) -> Result<(), CascadeError> {
        match self.backend.delete_object(object_id).await {
            Err(err) if err.is_not_found() => {
                tracing::debug!(object_id, "already deleted");
                Ok(())
            }
            other => other,
        }
    }
}
