//! # nemaki-core
//!
//! Core types shared across the NemakiWare toolkit crates.
//!
//! - CMIS objects decoded from Browser Binding JSON ([`object`])
//! - Normalized property values ([`property`]): the Browser Binding sends
//!   `{value: X}` wrappers in full mode and bare values in succinct mode, both
//!   collapse into [`PropertyValue`]
//! - Relationship edges used by cascade delete ([`relationship`])
//! - Webhook delivery log, audit metrics, semantic search and principal DTOs
//! - Cross-cutting error types ([`errors`])

pub mod audit;
pub mod errors;
pub mod object;
pub mod principal;
pub mod property;
pub mod rag;
pub mod relationship;
pub mod webhook;

pub use errors::CoreError;
pub use object::{BaseTypeId, CmisObject, ObjectList};
pub use property::PropertyValue;
pub use relationship::{PARENT_CHILD_RELATIONSHIP, Relationship};
