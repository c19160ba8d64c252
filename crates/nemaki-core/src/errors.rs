//! Cross-cutting error types.
//!
//! Transport errors live in `nemaki-client`; this module only covers data
//! shape and validation problems that any crate can hit while decoding DTOs.

use thiserror::Error;

/// Errors that can be raised while decoding or validating CMIS data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A server payload did not have the expected shape.
    #[error("Malformed {what}: {reason}")]
    Malformed { what: String, reason: String },

    /// A required property was missing from an object.
    #[error("Missing property {property} on object {object_id}")]
    MissingProperty { object_id: String, property: String },

    /// Data failed validation (user input, identifiers).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn malformed(what: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            what: what.to_string(),
            reason: reason.into(),
        }
    }
}
