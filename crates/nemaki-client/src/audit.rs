//! Audit logger metrics (admin only).

use nemaki_core::audit::AuditMetrics;

use crate::{ClientError, CmisClient, parse_json};

impl CmisClient {
    fn audit_url(&self, suffix: &str) -> String {
        self.rest_all_url(&format!("audit/metrics{suffix}"))
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not
    /// decode.
    pub async fn audit_metrics(&self) -> Result<AuditMetrics, ClientError> {
        let data = self.get_json(&self.audit_url("")).await?;
        serde_json::from_value(data).map_err(|e| ClientError::Parse(format!("audit metrics: {e}")))
    }

    /// Zero the counters. Returns the metrics the server reports afterwards,
    /// if any.
    ///
    /// # Errors
    ///
    /// See [`Self::audit_metrics`].
    pub async fn reset_audit_metrics(&self) -> Result<Option<AuditMetrics>, ClientError> {
        let url = self.audit_url("/reset");
        tracing::debug!(%url, "POST");
        let resp = self.send(self.http.post(&url)).await?;
        let data = parse_json(resp).await?;
        tracing::info!("audit metrics reset");
        Ok(serde_json::from_value(data).ok())
    }

    /// Prometheus text exposition.
    ///
    /// # Errors
    ///
    /// See [`Self::audit_metrics`].
    pub async fn audit_prometheus(&self) -> Result<String, ClientError> {
        let url = self.audit_url("/prometheus");
        tracing::debug!(%url, "GET");
        let resp = self.send(self.http.get(&url)).await?;
        Ok(resp.text().await?)
    }
}
