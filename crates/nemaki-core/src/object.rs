//! CMIS objects decoded from Browser Binding JSON.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::property::{Properties, PropertyValue};

// ---------------------------------------------------------------------------
// BaseTypeId
// ---------------------------------------------------------------------------

/// The CMIS base type of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseTypeId {
    #[serde(rename = "cmis:document")]
    Document,
    #[serde(rename = "cmis:folder")]
    Folder,
    #[serde(rename = "cmis:relationship")]
    Relationship,
    #[serde(rename = "cmis:policy")]
    Policy,
    #[serde(rename = "cmis:item")]
    Item,
    #[serde(rename = "cmis:secondary")]
    Secondary,
}

impl BaseTypeId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "cmis:document",
            Self::Folder => "cmis:folder",
            Self::Relationship => "cmis:relationship",
            Self::Policy => "cmis:policy",
            Self::Item => "cmis:item",
            Self::Secondary => "cmis:secondary",
        }
    }

    /// Parse a base type id. Unknown values fall back to `Document`, which is
    /// what the server reports for custom types lacking `cmis:baseTypeId`.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "cmis:folder" => Self::Folder,
            "cmis:relationship" => Self::Relationship,
            "cmis:policy" => Self::Policy,
            "cmis:item" => Self::Item,
            "cmis:secondary" => Self::Secondary,
            _ => Self::Document,
        }
    }
}

impl fmt::Display for BaseTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CmisObject
// ---------------------------------------------------------------------------

/// A CMIS object as seen by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmisObject {
    pub id: String,
    pub name: String,
    pub object_type_id: String,
    pub base_type: BaseTypeId,
    pub created_by: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modification_date: Option<DateTime<Utc>>,
    pub change_token: Option<String>,
    pub path: Option<String>,
    pub content_stream_length: Option<i64>,
    pub content_stream_mime_type: Option<String>,
    pub version_label: Option<String>,
    pub version_series_id: Option<String>,
    pub is_latest_version: Option<bool>,
    pub is_private_working_copy: Option<bool>,
    pub is_version_series_checked_out: Option<bool>,
    pub version_series_checked_out_id: Option<String>,
    #[serde(default)]
    pub secondary_type_ids: Vec<String>,
    #[serde(default)]
    pub allowable_actions: BTreeMap<String, bool>,
    #[serde(default)]
    pub properties: Properties,
}

impl CmisObject {
    /// Decode an object from Browser Binding JSON.
    ///
    /// Reads `succinctProperties` first and falls back to `properties`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Malformed`] if the payload is not a JSON object and
    /// [`CoreError::MissingProperty`] if it carries no `cmis:objectId`.
    pub fn from_browser_json(data: &Value) -> Result<Self, CoreError> {
        if !data.is_object() {
            return Err(CoreError::malformed("CMIS object", "expected a JSON object"));
        }

        let raw_props = data
            .get("succinctProperties")
            .or_else(|| data.get("properties"))
            .cloned()
            .unwrap_or(Value::Null);
        let properties = PropertyValue::map_from_json(&raw_props);

        let string = |key: &str| properties.get(key).and_then(PropertyValue::as_str).map(str::to_string);
        let boolean = |key: &str| properties.get(key).and_then(PropertyValue::as_bool);
        let datetime = |key: &str| properties.get(key).and_then(PropertyValue::as_datetime);

        let id = string("cmis:objectId").ok_or_else(|| CoreError::MissingProperty {
            object_id: "<unknown>".to_string(),
            property: "cmis:objectId".to_string(),
        })?;

        Ok(Self {
            name: string("cmis:name").unwrap_or_else(|| "Unknown".to_string()),
            object_type_id: string("cmis:objectTypeId")
                .unwrap_or_else(|| "cmis:document".to_string()),
            base_type: string("cmis:baseTypeId")
                .as_deref()
                .map_or(BaseTypeId::Document, BaseTypeId::parse_lenient),
            created_by: string("cmis:createdBy"),
            creation_date: datetime("cmis:creationDate"),
            last_modified_by: string("cmis:lastModifiedBy"),
            last_modification_date: datetime("cmis:lastModificationDate"),
            change_token: string("cmis:changeToken"),
            path: string("cmis:path"),
            content_stream_length: properties
                .get("cmis:contentStreamLength")
                .and_then(PropertyValue::as_i64),
            content_stream_mime_type: string("cmis:contentStreamMimeType"),
            version_label: string("cmis:versionLabel"),
            version_series_id: string("cmis:versionSeriesId"),
            is_latest_version: boolean("cmis:isLatestVersion"),
            is_private_working_copy: boolean("cmis:isPrivateWorkingCopy"),
            is_version_series_checked_out: boolean("cmis:isVersionSeriesCheckedOut"),
            version_series_checked_out_id: string("cmis:versionSeriesCheckedOutId"),
            secondary_type_ids: properties
                .get("cmis:secondaryObjectTypeIds")
                .map(PropertyValue::as_strings)
                .unwrap_or_default(),
            allowable_actions: extract_allowable_actions(data.get("allowableActions")),
            id,
            properties,
        })
    }

    /// Look up a normalized property.
    #[must_use]
    pub fn property(&self, id: &str) -> &PropertyValue {
        static ABSENT: PropertyValue = PropertyValue::Absent;
        self.properties.get(id).unwrap_or(&ABSENT)
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.base_type == BaseTypeId::Folder
    }

    #[must_use]
    pub fn is_checked_out(&self) -> bool {
        self.is_version_series_checked_out.unwrap_or(false)
    }

    /// Whether the server allows `action` (e.g. `canDeleteObject`). Missing
    /// actions are treated as not allowed.
    #[must_use]
    pub fn can(&self, action: &str) -> bool {
        self.allowable_actions.get(action).copied().unwrap_or(false)
    }
}

/// `allowableActions` is an object of booleans in CMIS 1.1. Some servers send
/// a list of action names instead; both shapes are accepted.
fn extract_allowable_actions(raw: Option<&Value>) -> BTreeMap<String, bool> {
    let Some(raw) = raw else {
        return BTreeMap::new();
    };
    let data = raw.get("allowableActions").unwrap_or(raw);

    match data {
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| value.as_bool().map(|b| (key.clone(), b)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|action| (action.to_string(), true))
            .collect(),
        _ => BTreeMap::new(),
    }
}

// ---------------------------------------------------------------------------
// ObjectList
// ---------------------------------------------------------------------------

/// A page of objects from `children`, `query`, `relationships` or
/// `versions` selectors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectList {
    pub objects: Vec<CmisObject>,
    pub has_more_items: bool,
    pub num_items: Option<u64>,
}

impl ObjectList {
    /// Decode any Browser Binding list shape.
    ///
    /// Accepts `{objects: [{object: {...}}]}` (children), `{objects: [{...}]}`
    /// (relationships), `{results: [{...}]}` (query) and bare arrays of either
    /// `{object: {...}}` (parents) or plain objects (versions). Entries that
    /// cannot be decoded are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Malformed`] if the payload is neither a list nor
    /// an object carrying `objects`/`results`.
    pub fn from_browser_json(data: &Value) -> Result<Self, CoreError> {
        let (entries, has_more_items, num_items) = match data {
            Value::Array(items) => (items.as_slice(), false, None),
            Value::Object(map) => {
                let entries = map
                    .get("objects")
                    .or_else(|| map.get("results"))
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        CoreError::malformed("object list", "missing `objects` or `results`")
                    })?;
                (
                    entries.as_slice(),
                    map.get("hasMoreItems").and_then(Value::as_bool).unwrap_or(false),
                    map.get("numItems").and_then(Value::as_u64),
                )
            }
            _ => return Err(CoreError::malformed("object list", "expected array or object")),
        };

        let objects = entries
            .iter()
            .filter_map(|entry| {
                let data = entry.get("object").unwrap_or(entry);
                CmisObject::from_browser_json(data).ok()
            })
            .collect();

        Ok(Self {
            objects,
            has_more_items,
            num_items,
        })
    }
}
