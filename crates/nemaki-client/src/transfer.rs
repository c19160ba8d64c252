//! Server-side filesystem import and export (admin only).

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{ClientError, CmisClient, parse_json};

/// Outcome of an import or export.
///
/// `status` is `success`, `partial` (some entries failed) or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "foldersExported")]
    pub folders_created: u64,
    #[serde(default, alias = "documentsExported")]
    pub documents_created: u64,
    #[serde(default)]
    pub target_path: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl TransferReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == "success"
    }
}

impl CmisClient {
    /// Import a directory on the server host into `folder_id`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] when the server answers `status: error` without
    /// having transferred anything (path outside the allowed roots, missing
    /// folder). Partial failures come back as a report.
    pub async fn filesystem_import(
        &self,
        folder_id: &str,
        source_path: &str,
    ) -> Result<TransferReport, ClientError> {
        self.transfer("import", folder_id, json!({ "sourcePath": source_path }))
            .await
    }

    /// Export `folder_id` to a directory on the server host.
    ///
    /// # Errors
    ///
    /// See [`Self::filesystem_import`].
    pub async fn filesystem_export(
        &self,
        folder_id: &str,
        target_path: &str,
        allow_overwrite: bool,
    ) -> Result<TransferReport, ClientError> {
        self.transfer(
            "export",
            folder_id,
            json!({ "targetPath": target_path, "allowOverwrite": allow_overwrite }),
        )
        .await
    }

    async fn transfer(
        &self,
        direction: &str,
        folder_id: &str,
        body: serde_json::Value,
    ) -> Result<TransferReport, ClientError> {
        let url = self.rest_repo_url(&format!(
            "importexport/filesystem/{direction}/{}",
            urlencoding::encode(folder_id)
        ));
        tracing::debug!(%url, "POST");
        let resp = self.send(self.http.post(&url).json(&body)).await?;
        let report: TransferReport = serde_json::from_value(parse_json(resp).await?)
            .map_err(|e| ClientError::Parse(format!("{direction} report: {e}")))?;
        if report.status == "error" && report.folders_created == 0 && report.documents_created == 0
        {
            let message = report
                .message
                .clone()
                .unwrap_or_else(|| report.errors.join("; "));
            return Err(ClientError::Api {
                status: 200,
                message,
            });
        }
        if !report.is_complete() {
            tracing::warn!(direction, status = %report.status, errors = report.errors.len(), "transfer incomplete");
        }
        Ok(report)
    }
}
