//! Semantic (RAG) search.

use nemaki_core::rag::{RagHealth, RagSearchRequest, RagSearchResponse};

use crate::{ClientError, CmisClient, parse_json};

impl CmisClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not
    /// decode.
    pub async fn rag_health(&self) -> Result<RagHealth, ClientError> {
        let data = self.get_json(&self.api_repo_url("rag/health")).await?;
        serde_json::from_value(data).map_err(|e| ClientError::Parse(format!("rag health: {e}")))
    }

    /// # Errors
    ///
    /// [`ClientError::InvalidRequest`] for a blank query; see
    /// [`Self::rag_health`].
    pub async fn rag_search(
        &self,
        request: &RagSearchRequest,
    ) -> Result<RagSearchResponse, ClientError> {
        if request.query.trim().is_empty() {
            return Err(ClientError::InvalidRequest("search query is empty".into()));
        }
        let url = self.api_repo_url("rag/search");
        tracing::debug!(%url, query = %request.query, "POST");
        let resp = self.send(self.http.post(&url).json(request)).await?;
        let data = parse_json(resp).await?;
        serde_json::from_value(data).map_err(|e| ClientError::Parse(format!("rag search: {e}")))
    }
}
