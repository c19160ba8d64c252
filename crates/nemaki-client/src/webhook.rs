//! Webhook delivery log (admin only).

use nemaki_core::webhook::{DeliveryLogEntry, RetryOutcome, WebhookTestResult};
use serde::Serialize;
use serde_json::Value;

use crate::http::nemaki_result;
use crate::{ClientError, CmisClient, parse_json};

/// Server default when no limit is sent.
pub const DEFAULT_DELIVERY_LIMIT: u32 = 20;
/// Server-side cap on one page of deliveries.
pub const MAX_DELIVERY_LIMIT: u32 = 100;

#[derive(Serialize)]
struct TestRequest<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<&'a str>,
}

impl CmisClient {
    /// Recent deliveries, newest first, optionally for one object.
    ///
    /// `limit` is clamped to `1..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the envelope reports
    /// failure.
    pub async fn list_deliveries(
        &self,
        object_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<DeliveryLogEntry>, ClientError> {
        let limit = limit.clamp(1, MAX_DELIVERY_LIMIT);
        let mut url = format!("{}?limit={limit}", self.rest_repo_url("webhook/deliveries"));
        if let Some(id) = object_id {
            url.push_str("&objectId=");
            url.push_str(&urlencoding::encode(id));
        }
        let data = nemaki_result(self.get_json(&url).await?)?;
        match data.get("deliveries") {
            Some(list) => serde_json::from_value(list.clone())
                .map_err(|e| ClientError::Parse(format!("deliveries: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    /// Ask the server to redeliver one webhook call.
    ///
    /// The server reports its own retry status (which may be
    /// `not_implemented`) even when the envelope says failure.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the answer carries no
    /// retry status.
    pub async fn retry_delivery(&self, delivery_id: &str) -> Result<RetryOutcome, ClientError> {
        let url = self.rest_repo_url(&format!(
            "webhook/deliveries/{}/retry",
            urlencoding::encode(delivery_id)
        ));
        tracing::debug!(%url, "POST");
        let resp = self.send(self.http.post(&url)).await?;
        let data = parse_json(resp).await?;
        if data.get("retryStatus").is_some() {
            return serde_json::from_value(data)
                .map_err(|e| ClientError::Parse(format!("retry: {e}")));
        }
        nemaki_result(data)?;
        Err(ClientError::Parse("retry response carried no retryStatus".into()))
    }

    /// Send a test event to `url`.
    ///
    /// # Errors
    ///
    /// See [`Self::list_deliveries`].
    pub async fn test_webhook(
        &self,
        url: &str,
        secret: Option<&str>,
    ) -> Result<WebhookTestResult, ClientError> {
        let endpoint = self.rest_repo_url("webhook/test");
        tracing::debug!(%endpoint, target = url, "POST");
        let resp = self
            .send(self.http.post(&endpoint).json(&TestRequest { url, secret }))
            .await?;
        let data: Value = nemaki_result(parse_json(resp).await?)?;
        serde_json::from_value(data).map_err(|e| ClientError::Parse(format!("webhook test: {e}")))
    }
}
