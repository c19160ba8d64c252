//! Per-root and bulk delete results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// Result of one root pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootOutcome {
    pub root_id: String,
    pub root_deleted: bool,
    pub descendant_deleted_count: usize,
    pub descendant_failed_ids: Vec<String>,
    /// Terminal stage: `success`, `partial_success` or `failed`.
    pub status: Stage,
    /// Why the root failed, when it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RootOutcome {
    pub(crate) fn failed(root_id: &str, error: impl Into<String>) -> Self {
        Self {
            root_id: root_id.to_string(),
            root_deleted: false,
            descendant_deleted_count: 0,
            descendant_failed_ids: Vec::new(),
            status: Stage::Failed,
            error: Some(error.into()),
        }
    }
}

/// Aggregate over several roots. `results` keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub success_count: usize,
    pub partial_count: usize,
    pub failed_count: usize,
    /// Distinct failed descendants across all roots.
    pub total_descendant_failed: usize,
    pub results: Vec<RootOutcome>,
}

impl BulkOutcome {
    #[must_use]
    pub fn from_results(results: Vec<RootOutcome>) -> Self {
        let mut outcome = Self::default();
        let mut failed_descendants = BTreeSet::new();
        for result in &results {
            match result.status {
                Stage::Success => outcome.success_count += 1,
                Stage::PartialSuccess => outcome.partial_count += 1,
                _ => outcome.failed_count += 1,
            }
            failed_descendants.extend(result.descendant_failed_ids.iter().map(String::as_str));
        }
        outcome.total_descendant_failed = failed_descendants.len();
        outcome.results = results;
        outcome
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed_count > 0
    }

    /// One-line summary for operators.
    #[must_use]
    pub fn message(&self) -> String {
        if self.results.is_empty() {
            return "Nothing to delete".to_string();
        }
        let mut message = format!("Deleted {} object(s)", self.success_count);
        if self.partial_count > 0 {
            message.push_str(&format!(
                "; {} deleted with failed descendants ({} descendant object(s) could not be deleted)",
                self.partial_count, self.total_descendant_failed
            ));
        }
        if self.failed_count > 0 {
            message.push_str(&format!(
                "; {} object(s) could not be deleted",
                self.failed_count
            ));
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outcome(root: &str, status: Stage, failed: &[&str]) -> RootOutcome {
        RootOutcome {
            root_id: root.into(),
            root_deleted: status != Stage::Failed,
            descendant_deleted_count: 0,
            descendant_failed_ids: failed.iter().map(|s| (*s).to_string()).collect(),
            status,
            error: None,
        }
    }

    #[test]
    fn counts_partition_results() {
        let bulk = BulkOutcome::from_results(vec![
            outcome("a", Stage::Success, &[]),
            outcome("b", Stage::PartialSuccess, &["x"]),
            outcome("c", Stage::Failed, &[]),
            outcome("d", Stage::Success, &[]),
        ]);
        assert_eq!(bulk.success_count, 2);
        assert_eq!(bulk.partial_count, 1);
        assert_eq!(bulk.failed_count, 1);
        assert_eq!(
            bulk.success_count + bulk.partial_count + bulk.failed_count,
            bulk.total()
        );
    }

    #[test]
    fn shared_failed_descendant_counts_once() {
        let bulk = BulkOutcome::from_results(vec![
            outcome("a", Stage::PartialSuccess, &["x", "y"]),
            outcome("b", Stage::PartialSuccess, &["x"]),
        ]);
        assert_eq!(bulk.total_descendant_failed, 2);
    }

    #[test]
    fn message_mentions_each_clause() {
        let bulk = BulkOutcome::from_results(vec![
            outcome("a", Stage::Success, &[]),
            outcome("b", Stage::PartialSuccess, &["x"]),
            outcome("c", Stage::Failed, &[]),
        ]);
        assert_eq!(
            bulk.message(),
            "Deleted 1 object(s); 1 deleted with failed descendants (1 descendant object(s) could not be deleted); 1 object(s) could not be deleted"
        );
        assert_eq!(BulkOutcome::default().message(), "Nothing to delete");
    }
}
