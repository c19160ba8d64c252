//! Browser Binding object mutations.

use nemaki_core::property::Properties;
use nemaki_core::{CmisObject, PropertyValue};
use serde_json::Value;

use crate::form::{AbsentValues, BrowserForm};
use crate::{ClientError, CmisClient, parse_json};

/// Relationship type used when the caller does not pick one.
pub const DEFAULT_RELATIONSHIP_TYPE: &str = "nemaki:bidirectionalRelationship";

/// Content uploaded with `createDocument` or `checkIn`.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl Upload {
    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part, ClientError> {
        Ok(reqwest::multipart::Part::bytes(self.data)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)?)
    }
}

impl CmisClient {
    /// Create a folder under `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the request or the
    /// response is not a CMIS object.
    pub async fn create_folder(
        &self,
        parent_id: &str,
        name: &str,
        properties: &Properties,
    ) -> Result<CmisObject, ClientError> {
        let form = BrowserForm::action("createFolder")
            .field("objectId", parent_id)
            .field("folderId", parent_id)
            .properties(&with_defaults(properties, name, "cmis:folder"), AbsentValues::Skip);
        let resp = self.post_form(&form).await?;
        let data = parse_json(resp).await?;
        tracing::info!(parent_id, name, "folder created");
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Create a document with content under `parent_id`.
    ///
    /// `cmis:name` defaults to the upload's file name and
    /// `cmis:objectTypeId` to `cmis:document`.
    ///
    /// # Errors
    ///
    /// See [`Self::create_folder`].
    pub async fn create_document(
        &self,
        parent_id: &str,
        properties: &Properties,
        content: Upload,
    ) -> Result<CmisObject, ClientError> {
        let properties = with_defaults(properties, &content.file_name, "cmis:document");
        let mime_type = content.mime_type.clone();
        let form = BrowserForm::action("createDocument")
            .field("_charset_", "UTF-8")
            .field("objectId", parent_id)
            .field("folderId", parent_id)
            .properties(&properties, AbsentValues::Skip)
            .into_multipart()
            .text("contentType", mime_type)
            .part("content", content.into_part()?);
        let resp = self.post_multipart(form).await?;
        let data = parse_json(resp).await?;
        tracing::info!(parent_id, "document created");
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Update properties. Absent values clear the property.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] with status 409 when `change_token` is stale;
    /// see [`Self::create_folder`].
    pub async fn update_properties(
        &self,
        object_id: &str,
        properties: &Properties,
        change_token: Option<&str>,
    ) -> Result<CmisObject, ClientError> {
        if properties.is_empty() {
            return Err(ClientError::InvalidRequest("no properties to update".into()));
        }
        let form = BrowserForm::action("updateProperties")
            .field("objectId", object_id)
            .optional("changeToken", change_token)
            .properties(properties, AbsentValues::Clear);
        let resp = self.post_form(&form).await?;
        let data = parse_json(resp).await?;
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Delete one object and all its versions.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the object is already gone; see
    /// [`Self::create_folder`].
    pub async fn delete_object(&self, object_id: &str) -> Result<(), ClientError> {
        let form = BrowserForm::action("delete")
            .field("objectId", object_id)
            .field("allVersions", "true");
        self.post_form(&form).await?;
        tracing::debug!(object_id, "deleted");
        Ok(())
    }

    /// Delete a folder and everything below it. Returns the ids the server
    /// could not delete.
    ///
    /// # Errors
    ///
    /// See [`Self::delete_object`].
    pub async fn delete_tree(&self, folder_id: &str) -> Result<Vec<String>, ClientError> {
        let form = BrowserForm::action("deleteTree")
            .field("objectId", folder_id)
            .field("allVersions", "true")
            .field("unfileObjects", "delete")
            .field("continueOnFailure", "true");
        let resp = self.post_form(&form).await?;
        let data = parse_json(resp).await?;
        Ok(failed_ids(&data))
    }

    /// Attach and detach secondary types.
    ///
    /// # Errors
    ///
    /// See [`Self::update_properties`].
    pub async fn update_secondary_types(
        &self,
        object_id: &str,
        add: &[String],
        remove: &[String],
        change_token: Option<&str>,
    ) -> Result<CmisObject, ClientError> {
        if add.is_empty() && remove.is_empty() {
            return Err(ClientError::InvalidRequest(
                "nothing to add or remove".into(),
            ));
        }
        let mut form = BrowserForm::action("update")
            .field("_charset_", "UTF-8")
            .field("objectId", object_id)
            .optional("changeToken", change_token);
        if !add.is_empty() {
            form = form.field("addSecondaryTypeIds", add.join(","));
        }
        if !remove.is_empty() {
            form = form.field("removeSecondaryTypeIds", remove.join(","));
        }
        let resp = self.post_form(&form).await?;
        let data = parse_json(resp).await?;
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Create a `source → target` relationship.
    ///
    /// # Errors
    ///
    /// See [`Self::create_folder`].
    pub async fn create_relationship(
        &self,
        source_id: &str,
        target_id: &str,
        type_id: Option<&str>,
    ) -> Result<CmisObject, ClientError> {
        let scalar = |v: &str| PropertyValue::Scalar(Value::String(v.to_string()));
        let form = BrowserForm::action("createRelationship")
            .property(
                "cmis:objectTypeId",
                &scalar(type_id.unwrap_or(DEFAULT_RELATIONSHIP_TYPE)),
                AbsentValues::Skip,
            )
            .property("cmis:sourceId", &scalar(source_id), AbsentValues::Skip)
            .property("cmis:targetId", &scalar(target_id), AbsentValues::Skip);
        let resp = self.post_form(&form).await?;
        let data = parse_json(resp).await?;
        Ok(CmisObject::from_browser_json(&data)?)
    }
}

/// Caller properties plus `cmis:name` / `cmis:objectTypeId` defaults.
fn with_defaults(properties: &Properties, name: &str, type_id: &str) -> Properties {
    let mut merged = properties.clone();
    merged
        .entry("cmis:name".to_string())
        .or_insert_with(|| PropertyValue::Scalar(Value::String(name.to_string())));
    merged
        .entry("cmis:objectTypeId".to_string())
        .or_insert_with(|| PropertyValue::Scalar(Value::String(type_id.to_string())));
    merged
}

/// `deleteTree` answers with an empty body on full success and
/// `{"ids": [...]}` listing what survived otherwise.
fn failed_ids(data: &Value) -> Vec<String> {
    data.get("ids")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn defaults_do_not_override_caller_properties() {
        let mut props = Properties::new();
        props.insert(
            "cmis:objectTypeId".into(),
            PropertyValue::Scalar(json!("nemaki:contract")),
        );
        let merged = with_defaults(&props, "a.pdf", "cmis:document");
        assert_eq!(merged["cmis:objectTypeId"].as_str(), Some("nemaki:contract"));
        assert_eq!(merged["cmis:name"].as_str(), Some("a.pdf"));
    }

    #[test]
    fn delete_tree_failed_ids() {
        assert!(failed_ids(&Value::Null).is_empty());
        assert_eq!(failed_ids(&json!({"ids": ["x", "y"]})), vec!["x", "y"]);
    }
}
