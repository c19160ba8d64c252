//! What the resolver needs from a repository.

use std::future::Future;

use nemaki_client::CmisClient;
use nemaki_core::Relationship;

use crate::error::CascadeError;

/// Page size for relationship queries.
const QUERY_PAGE: u32 = 100;

/// Relationship lookup and single-object deletion.
///
/// [`CmisClient`] implements this over the Browser Binding. Tests use an
/// in-memory graph.
pub trait CascadeBackend: Sync {
    /// Relationships of `relationship_type` whose source is `source_id`.
    fn find_relationships(
        &self,
        source_id: &str,
        relationship_type: &str,
    ) -> impl Future<Output = Result<Vec<Relationship>, CascadeError>> + Send;

    /// Delete one object. A missing object must surface as an error for
    /// which [`CascadeError::is_not_found`] holds.
    fn delete_object(&self, object_id: &str) -> impl Future<Output = Result<(), CascadeError>> + Send;
}

impl CascadeBackend for CmisClient {
    async fn find_relationships(
        &self,
        source_id: &str,
        relationship_type: &str,
    ) -> Result<Vec<Relationship>, CascadeError> {
        let statement = relationship_query(source_id, relationship_type);
        let mut edges = Vec::new();
        let mut skip = 0;
        loop {
            let page = self.query(&statement, QUERY_PAGE, skip).await?;
            let fetched = u32::try_from(page.objects.len()).unwrap_or(u32::MAX);
            edges.extend(page.objects.iter().filter_map(Relationship::from_object));
            if !page.has_more_items || fetched == 0 {
                break;
            }
            skip = skip.saturating_add(fetched);
        }
        Ok(edges)
    }

    async fn delete_object(&self, object_id: &str) -> Result<(), CascadeError> {
        Ok(CmisClient::delete_object(self, object_id).await?)
    }
}

/// CMIS SQL selecting outgoing edges of one node.
#[must_use]
pub fn relationship_query(source_id: &str, relationship_type: &str) -> String {
    format!(
        "SELECT cmis:objectId, cmis:objectTypeId, cmis:sourceId, cmis:targetId FROM {relationship_type} WHERE cmis:sourceId = '{}'",
        escape_literal(source_id)
    )
}

/// Escape a CMIS SQL string literal (`'` and `\`).
fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
