//! Breadth-first descendant discovery.

use std::collections::{HashSet, VecDeque};

use nemaki_core::Relationship;

use crate::backend::CascadeBackend;
use crate::error::CascadeError;

/// Everything reachable from one root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Distinct descendants in BFS order. Never contains the root.
    pub descendant_ids: Vec<String>,
    /// Every edge traversed, including edges back into visited nodes.
    pub edges: Vec<Relationship>,
    /// Nodes whose lookup failed and were treated as leaves.
    pub lookup_failures: Vec<String>,
}

/// Walk `relationship_type` edges from `root_id`.
///
/// A single visited set spans the traversal, so cycles terminate and shared
/// descendants are reported once. When `fail_open` is set, a failed lookup
/// is logged and the node is treated as a leaf.
///
/// # Errors
///
/// Returns [`CascadeError::Discovery`] on the first failed lookup when
/// `fail_open` is false.
pub async fn discover<B: CascadeBackend>(
    backend: &B,
    root_id: &str,
    relationship_type: &str,
    fail_open: bool,
) -> Result<Discovery, CascadeError> {
    let mut visited = HashSet::from([root_id.to_string()]);
    let mut queue = VecDeque::from([root_id.to_string()]);
    let mut found = Discovery::default();

    while let Some(node) = queue.pop_front() {
        let edges = match backend.find_relationships(&node, relationship_type).await {
            Ok(edges) => edges,
            Err(err) if fail_open => {
                tracing::warn!(root_id, node = %node, error = %err, "relationship lookup failed; treating node as leaf");
                found.lookup_failures.push(node);
                continue;
            }
            Err(err) => {
                return Err(CascadeError::Discovery {
                    object_id: node,
                    reason: err.to_string(),
                });
            }
        };

        for edge in edges {
            tracing::debug!(
                root_id,
                relationship_id = %edge.id,
                source = %edge.source_id,
                target = %edge.target_id,
                "cascade edge"
            );
            if visited.insert(edge.target_id.clone()) {
                found.descendant_ids.push(edge.target_id.clone());
                queue.push_back(edge.target_id.clone());
            }
            found.edges.push(edge);
        }
    }

    Ok(found)
}
