use nemaki_client::ClientError;
use thiserror::Error;

use crate::stage::Stage;

/// Errors raised by cascade delete backends and the resolver.
#[derive(Debug, Error)]
pub enum CascadeError {
    /// The object does not exist (already deleted counts as deleted).
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Relationship lookup for one node failed.
    #[error("Relationship lookup for {object_id} failed: {reason}")]
    Discovery { object_id: String, reason: String },

    /// The backend refused or failed a delete.
    #[error("Delete of {object_id} failed: {reason}")]
    Delete { object_id: String, reason: String },

    #[error("Invalid cascade transition for {root_id}: {from} → {to}")]
    InvalidTransition {
        root_id: String,
        from: Stage,
        to: Stage,
    },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CascadeError {
    /// True for a missing object, whether reported by a backend directly or
    /// through an HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Client(err) => err.is_not_found(),
            _ => false,
        }
    }
}
