//! Per-root lifecycle of a cascade delete.
//!
//! ```text
//! Pending → DiscoveringDescendants → DeletingRoot → DeletingDescendants → Success
//!                    │                    │                  └──────────→ PartialSuccess
//!                    └────────────────────┴──────────────────────────────→ Failed
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CascadeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Pending,
    DiscoveringDescendants,
    DeletingRoot,
    DeletingDescendants,
    Success,
    PartialSuccess,
    Failed,
}

impl Stage {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::PartialSuccess | Self::Failed)
    }

    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::DiscoveringDescendants)
                | (Self::DiscoveringDescendants, Self::DeletingRoot | Self::Failed)
                | (Self::DeletingRoot, Self::DeletingDescendants | Self::Failed)
                | (
                    Self::DeletingDescendants,
                    Self::Success | Self::PartialSuccess
                )
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::DiscoveringDescendants => "discovering_descendants",
            Self::DeletingRoot => "deleting_root",
            Self::DeletingDescendants => "deleting_descendants",
            Self::Success => "success",
            Self::PartialSuccess => "partial_success",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current stage of one root pipeline.
#[derive(Debug)]
pub struct StageTracker {
    root_id: String,
    stage: Stage,
}

impl StageTracker {
    #[must_use]
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
            stage: Stage::Pending,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Move to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::InvalidTransition`] if `next` does not follow
    /// the current stage.
    pub fn advance(&mut self, next: Stage) -> Result<(), CascadeError> {
        if !self.stage.can_advance_to(next) {
            return Err(CascadeError::InvalidTransition {
                root_id: self.root_id.clone(),
                from: self.stage,
                to: next,
            });
        }
        tracing::debug!(root_id = %self.root_id, from = %self.stage, to = %next, "cascade stage");
        self.stage = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn happy_path_reaches_success() {
        let mut tracker = StageTracker::new("a");
        for next in [
            Stage::DiscoveringDescendants,
            Stage::DeletingRoot,
            Stage::DeletingDescendants,
            Stage::Success,
        ] {
            tracker.advance(next).unwrap();
        }
        assert!(tracker.stage().is_terminal());
    }

    #[rstest]
    #[case(Stage::Pending, Stage::DeletingRoot)]
    #[case(Stage::Pending, Stage::Failed)]
    #[case(Stage::DeletingDescendants, Stage::Failed)]
    #[case(Stage::Success, Stage::Pending)]
    #[case(Stage::Failed, Stage::DeletingRoot)]
    fn rejects_illegal_transitions(#[case] from: Stage, #[case] to: Stage) {
        assert!(!from.can_advance_to(to));
    }

    #[test]
    fn invalid_transition_keeps_stage() {
        let mut tracker = StageTracker::new("a");
        let err = tracker.advance(Stage::Success).unwrap_err();
        assert!(matches!(err, CascadeError::InvalidTransition { from: Stage::Pending, .. }));
        assert_eq!(tracker.stage(), Stage::Pending);
    }
}
