use chrono::{DateTime, Utc};
use nemaki_core::CmisObject;
use serde::Serialize;

/// One line of an object listing.
#[derive(Debug, Serialize)]
pub struct ObjectRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type_id: String,
    pub version: Option<String>,
    pub modified_by: Option<String>,
    pub modified: Option<DateTime<Utc>>,
}

impl From<&CmisObject> for ObjectRow {
    fn from(object: &CmisObject) -> Self {
        Self {
            id: object.id.clone(),
            name: object.name.clone(),
            object_type_id: object.object_type_id.clone(),
            version: object.version_label.clone(),
            modified_by: object.last_modified_by.clone(),
            modified: object.last_modification_date,
        }
    }
}

/// Listing rows for a page of objects.
pub fn object_rows(objects: &[CmisObject]) -> Vec<ObjectRow> {
    objects.iter().map(ObjectRow::from).collect()
}

/// A page of rows plus paging hints.
#[derive(Debug, Serialize)]
pub struct Page {
    pub items: Vec<ObjectRow>,
    pub has_more_items: bool,
    pub num_items: Option<u64>,
}
