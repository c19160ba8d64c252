//! Relationship edges between CMIS objects.

use serde::{Deserialize, Serialize};

use crate::object::CmisObject;

/// Relationship type NemakiWare uses to model parent/child dependencies
/// outside the folder hierarchy. Deleting a source cascades to its targets.
pub const PARENT_CHILD_RELATIONSHIP: &str = "nemaki:parentChildRelationship";

/// A directed `source → target` relationship object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub type_id: String,
    pub source_id: String,
    pub target_id: String,
}

impl Relationship {
    /// Build an edge from a decoded relationship object. Returns `None` when
    /// either endpoint is missing, which happens for query projections that
    /// did not select `cmis:sourceId`/`cmis:targetId`.
    #[must_use]
    pub fn from_object(object: &CmisObject) -> Option<Self> {
        let source_id = object.property("cmis:sourceId").as_str()?.to_string();
        let target_id = object.property("cmis:targetId").as_str()?.to_string();
        Some(Self {
            id: object.id.clone(),
            type_id: object.object_type_id.clone(),
            source_id,
            target_id,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_edge_from_relationship_object() {
        let obj = CmisObject::from_browser_json(&json!({
            "succinctProperties": {
                "cmis:objectId": "rel-1",
                "cmis:objectTypeId": PARENT_CHILD_RELATIONSHIP,
                "cmis:baseTypeId": "cmis:relationship",
                "cmis:sourceId": "a",
                "cmis:targetId": "b"
            }
        }))
        .expect("decode");

        let edge = Relationship::from_object(&obj).expect("edge");
        assert_eq!(edge.source_id, "a");
        assert_eq!(edge.target_id, "b");
        assert_eq!(edge.type_id, PARENT_CHILD_RELATIONSHIP);
    }

    #[test]
    fn missing_endpoint_yields_none() {
        let obj = CmisObject::from_browser_json(&json!({
            "succinctProperties": {"cmis:objectId": "rel-2", "cmis:targetId": "b"}
        }))
        .expect("decode");
        assert!(Relationship::from_object(&obj).is_none());
    }
}
