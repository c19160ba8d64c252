//! # nemaki-cascade
//!
//! Cascade and bulk delete over `nemaki:parentChildRelationship` edges.
//!
//! For each root the resolver discovers every object reachable through the
//! configured relationship type (BFS with one visited set, so diamonds and
//! cycles are handled), deletes the root, then deletes each distinct
//! descendant. Failures are captured per object and aggregated:
//!
//! - root fails → [`Stage::Failed`] regardless of descendants
//! - root ok, some descendant fails → [`Stage::PartialSuccess`]
//! - everything ok → [`Stage::Success`]
//!
//! Bulk runs keep at most `root_concurrency` root pipelines in flight and
//! count a failed descendant shared by several roots once.

pub mod backend;
pub mod discovery;
pub mod error;
pub mod outcome;
pub mod plan;
pub mod resolver;
pub mod stage;

pub use backend::CascadeBackend;
pub use error::CascadeError;
pub use outcome::{BulkOutcome, RootOutcome};
pub use plan::CascadePlan;
pub use resolver::CascadeResolver;
pub use stage::Stage;
