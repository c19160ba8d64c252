use clap::{Args, Subcommand};

/// Object commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ObjectCommands {
    /// Show the repository root folder.
    Root,
    /// Show one object.
    Get {
        /// Object id.
        id: String,
    },
    /// Show the object at a repository path.
    GetPath {
        /// Path such as /Sites/contract.pdf.
        path: String,
    },
    /// List a folder's children.
    Children(ChildrenArgs),
    /// List an object's parent folders.
    Parents {
        /// Object id.
        id: String,
    },
    /// Create a folder.
    Mkdir(MkdirArgs),
    /// Upload a file as a new document.
    Upload(UploadArgs),
    /// Download a document's content.
    Download(DownloadArgs),
    /// Update properties.
    Update(UpdateArgs),
    /// Delete objects together with their parent/child descendants.
    Delete(DeleteArgs),
    /// Delete a folder and everything below it.
    DeleteTree {
        /// Folder id.
        id: String,
    },
    /// Attach or detach secondary types.
    Secondary(SecondaryArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ChildrenArgs {
    /// Folder id.
    pub id: String,
    /// Page size (defaults to `general.default_limit`).
    #[arg(long)]
    pub max_items: Option<u32>,
    /// Children to skip.
    #[arg(long, default_value_t = 0)]
    pub skip: u32,
}

#[derive(Clone, Debug, Args)]
pub struct MkdirArgs {
    /// Parent folder id.
    pub parent: String,
    /// Folder name.
    pub name: String,
    /// Extra properties as key=value.
    #[arg(long = "set")]
    pub set: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// Parent folder id.
    pub parent: String,
    /// Local file to upload.
    pub file: String,
    /// Document name (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
    /// Object type id (defaults to cmis:document).
    #[arg(long = "type")]
    pub type_id: Option<String>,
    /// MIME type (guessed from the extension when omitted).
    #[arg(long)]
    pub mime_type: Option<String>,
    /// Extra properties as key=value.
    #[arg(long = "set")]
    pub set: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DownloadArgs {
    /// Document id.
    pub id: String,
    /// Output file.
    #[arg(long)]
    pub output: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    /// Object id.
    pub id: String,
    /// Property assignment: key=value, key=[a,b] for multi values, key= to clear.
    #[arg(long = "set", required = true)]
    pub set: Vec<String>,
    /// Change token for optimistic locking.
    #[arg(long)]
    pub change_token: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Root object ids.
    #[arg(required = true)]
    pub ids: Vec<String>,
    /// Only show what would be deleted.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SecondaryArgs {
    /// Object id.
    pub id: String,
    /// Secondary type to attach.
    #[arg(long)]
    pub add: Vec<String>,
    /// Secondary type to detach.
    #[arg(long)]
    pub remove: Vec<String>,
    /// Change token for optimistic locking.
    #[arg(long)]
    pub change_token: Option<String>,
}

/// Relationship commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RelationshipCommands {
    /// Create a source → target relationship.
    Create {
        /// Source object id.
        source: String,
        /// Target object id.
        target: String,
        /// Relationship type (defaults to nemaki:bidirectionalRelationship).
        #[arg(long = "type")]
        type_id: Option<String>,
    },
    /// List relationships of an object.
    List {
        /// Object id.
        id: String,
    },
}
