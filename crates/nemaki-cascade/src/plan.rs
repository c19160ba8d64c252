//! Dry-run view of a cascade.

use std::collections::HashMap;

use nemaki_core::Relationship;
use rustworkx_core::petgraph::algo::toposort;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::discovery::Discovery;

/// What a cascade delete of `root_id` would remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadePlan {
    pub root_id: String,
    pub descendant_ids: Vec<String>,
    pub edges: Vec<Relationship>,
    /// Whether the traversed relationships contain a cycle.
    pub has_cycles: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lookup_failures: Vec<String>,
}

impl CascadePlan {
    pub(crate) fn new(root_id: &str, found: Discovery) -> Self {
        let has_cycles = has_cycles(&found.edges);
        Self {
            root_id: root_id.to_string(),
            descendant_ids: found.descendant_ids,
            edges: found.edges,
            has_cycles,
            lookup_failures: found.lookup_failures,
        }
    }

    /// Root plus descendants.
    #[must_use]
    pub fn object_count(&self) -> usize {
        1 + self.descendant_ids.len()
    }
}

fn has_cycles(edges: &[Relationship]) -> bool {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut index: HashMap<&str, NodeIndex> = HashMap::new();
    for edge in edges {
        let source = *index
            .entry(edge.source_id.as_str())
            .or_insert_with(|| graph.add_node(edge.source_id.as_str()));
        let target = *index
            .entry(edge.target_id.as_str())
            .or_insert_with(|| graph.add_node(edge.target_id.as_str()));
        graph.add_edge(source, target, ());
    }
    toposort(&graph, None).is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str) -> Relationship {
        Relationship {
            id: format!("{source}->{target}"),
            type_id: nemaki_core::PARENT_CHILD_RELATIONSHIP.into(),
            source_id: source.into(),
            target_id: target.into(),
        }
    }

    #[test]
    fn diamond_is_acyclic() {
        assert!(!has_cycles(&[edge("a", "b"), edge("a", "c"), edge("b", "c")]));
    }

    #[test]
    fn back_edge_is_a_cycle() {
        assert!(has_cycles(&[edge("a", "b"), edge("b", "a")]));
        assert!(has_cycles(&[edge("a", "a")]));
    }

    #[test]
    fn object_count_includes_root() {
        let plan = CascadePlan::new(
            "a",
            Discovery {
                descendant_ids: vec!["b".into(), "c".into()],
                edges: vec![edge("a", "b"), edge("a", "c")],
                lookup_failures: Vec::new(),
            },
        );
        assert_eq!(plan.object_count(), 3);
        assert!(!plan.has_cycles);
    }
}
