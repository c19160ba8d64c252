//! Check-out / check-in and version history.

use nemaki_core::{CmisObject, ObjectList};

use crate::form::BrowserForm;
use crate::objects::Upload;
use crate::{ClientError, CmisClient, parse_json};

/// Options for [`CmisClient::check_in`].
#[derive(Debug, Clone, Default)]
pub struct CheckIn {
    pub major: bool,
    pub comment: Option<String>,
    pub content: Option<Upload>,
}

impl CmisClient {
    /// Check out a document. Returns the private working copy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the request (e.g. the
    /// version series is already checked out).
    pub async fn check_out(&self, object_id: &str) -> Result<CmisObject, ClientError> {
        let form = BrowserForm::action("checkOut").field("objectId", object_id);
        let resp = self.post_form(&form).await?;
        let data = parse_json(resp).await?;
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Check in a private working copy, optionally with new content.
    ///
    /// # Errors
    ///
    /// See [`Self::check_out`].
    pub async fn check_in(
        &self,
        pwc_id: &str,
        options: CheckIn,
    ) -> Result<CmisObject, ClientError> {
        let form = BrowserForm::action("checkIn")
            .field("objectId", pwc_id)
            .field("major", options.major.to_string())
            .optional("checkinComment", options.comment.as_deref());

        let resp = match options.content {
            Some(upload) => {
                let mime_type = upload.mime_type.clone();
                let file_name = upload.file_name.clone();
                let multipart = form
                    .into_multipart()
                    .text("filename", file_name)
                    .text("mimetype", mime_type)
                    .part("content", upload.into_part()?);
                self.post_multipart(multipart).await?
            }
            None => self.post_form(&form).await?,
        };
        let data = parse_json(resp).await?;
        tracing::info!(pwc_id, major = options.major, "checked in");
        Ok(CmisObject::from_browser_json(&data)?)
    }

    /// Discard a private working copy.
    ///
    /// # Errors
    ///
    /// See [`Self::check_out`].
    pub async fn cancel_check_out(&self, object_id: &str) -> Result<(), ClientError> {
        let form = BrowserForm::action("cancelCheckOut").field("objectId", object_id);
        self.post_form(&form).await?;
        Ok(())
    }

    /// All versions of the series `object_id` belongs to, newest first.
    ///
    /// # Errors
    ///
    /// See [`Self::check_out`].
    pub async fn get_all_versions(&self, object_id: &str) -> Result<Vec<CmisObject>, ClientError> {
        let url = self.selector_url("versions", Some(object_id), &[]);
        let data = self.get_json(&url).await?;
        Ok(ObjectList::from_browser_json(&data)?.objects)
    }
}
