pub mod admin;
pub mod auth;
pub mod object;
pub mod rag;
pub mod repository;
pub mod version;

pub use admin::{AuditCommands, FsCommands, GroupCommands, UserCommands, WebhookCommands};
pub use auth::AuthCommands;
pub use object::{ObjectCommands, RelationshipCommands};
pub use rag::RagCommands;
pub use repository::{AclCommands, RepoCommands};
pub use version::VersionCommands;
