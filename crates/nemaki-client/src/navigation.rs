//! Read-only Browser Binding selectors.

use nemaki_core::{CmisObject, ObjectList, Relationship};
use reqwest::header::CONTENT_TYPE;

use crate::{ClientError, CmisClient};

/// Raw content stream of a document.
#[derive(Debug, Clone)]
pub struct ContentStream {
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

impl CmisClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the payload is not a
    /// CMIS object.
    pub async fn get_root_folder(&self) -> Result<CmisObject, ClientError> {
        let url = self.selector_url("object", None, &[]);
        let data = self.get_json(&url).await?;
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Fetch one object with its allowable actions.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] for an unknown id; see [`Self::get_root_folder`].
    pub async fn get_object(&self, object_id: &str) -> Result<CmisObject, ClientError> {
        let url = self.selector_url(
            "object",
            Some(object_id),
            &[("includeAllowableActions", "true".to_string())],
        );
        let data = self.get_json(&url).await?;
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Fetch an object by repository path (`/Sites/a.txt`).
    ///
    /// # Errors
    ///
    /// See [`Self::get_object`].
    pub async fn get_object_by_path(&self, path: &str) -> Result<CmisObject, ClientError> {
        let encoded = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let url = format!(
            "{}/root/{encoded}?cmisselector=object&succinct=true&includeAllowableActions=true",
            self.browser_url()
        );
        let data = self.get_json(&url).await?;
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// One page of a folder's children.
    ///
    /// # Errors
    ///
    /// See [`Self::get_object`].
    pub async fn get_children(
        &self,
        folder_id: &str,
        max_items: u32,
        skip_count: u32,
    ) -> Result<ObjectList, ClientError> {
        let url = self.selector_url(
            "children",
            Some(folder_id),
            &[
                ("maxItems", max_items.to_string()),
                ("skipCount", skip_count.to_string()),
                ("includeAllowableActions", "true".to_string()),
            ],
        );
        let data = self.get_json(&url).await?;
        Ok(ObjectList::from_browser_json(&data)?)
    }

    /// # Errors
    ///
    /// See [`Self::get_object`].
    pub async fn get_parents(&self, object_id: &str) -> Result<Vec<CmisObject>, ClientError> {
        let url = self.selector_url("parents", Some(object_id), &[]);
        let data = self.get_json(&url).await?;
        Ok(ObjectList::from_browser_json(&data)?.objects)
    }

    /// Relationships where `object_id` is source or target.
    ///
    /// # Errors
    ///
    /// See [`Self::get_object`].
    pub async fn get_relationships(
        &self,
        object_id: &str,
    ) -> Result<Vec<Relationship>, ClientError> {
        let url = self.selector_url(
            "relationships",
            Some(object_id),
            &[
                ("relationshipDirection", "either".to_string()),
                ("includeSubRelationshipTypes", "true".to_string()),
            ],
        );
        let data = self.get_json(&url).await?;
        Ok(ObjectList::from_browser_json(&data)?
            .objects
            .iter()
            .filter_map(Relationship::from_object)
            .collect())
    }

    /// Run a CMIS SQL statement.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] for a statement the server rejects; see
    /// [`Self::get_object`].
    pub async fn query(
        &self,
        statement: &str,
        max_items: u32,
        skip_count: u32,
    ) -> Result<ObjectList, ClientError> {
        let url = self.selector_url(
            "query",
            None,
            &[
                ("q", statement.to_string()),
                ("maxItems", max_items.to_string()),
                ("skipCount", skip_count.to_string()),
            ],
        );
        let data = self.get_json(&url).await?;
        Ok(ObjectList::from_browser_json(&data)?)
    }

    /// Download a document's content stream.
    ///
    /// # Errors
    ///
    /// See [`Self::get_object`].
    pub async fn get_content(&self, object_id: &str) -> Result<ContentStream, ClientError> {
        let url = self.selector_url("content", Some(object_id), &[]);
        tracing::debug!(%url, "GET content");
        let resp = self.send(self.http.get(&url)).await?;
        let mime_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let data = resp.bytes().await?.to_vec();
        Ok(ContentStream { mime_type, data })
    }
}
