//! Webhook delivery log and test results.
//!
//! Delivery entries are read-only from the client; retries are performed by
//! the server when an operator asks for one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One delivery attempt of a webhook event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLogEntry {
    pub delivery_id: String,
    pub object_id: Option<String>,
    pub event_type: String,
    pub webhook_url: String,
    pub status_code: Option<u16>,
    pub success: bool,
    #[serde(default)]
    pub attempt_count: u32,
    pub delivered_at: Option<DateTime<Utc>>,
    pub response_body: Option<String>,
}

/// Result of sending a test payload to a webhook URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookTestResult {
    pub success: bool,
    pub status_code: Option<u16>,
    /// Round trip in milliseconds as measured by the server.
    pub response_time: Option<u64>,
    pub response_body: Option<String>,
}

/// Outcome of a manual retry request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryOutcome {
    pub delivery_id: String,
    pub retry_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_server_delivery_entry() {
        let entry: DeliveryLogEntry = serde_json::from_value(json!({
            "deliveryId": "d-1",
            "objectId": "doc-1",
            "eventType": "CREATED",
            "webhookUrl": "https://hooks.example.com/in",
            "statusCode": 502,
            "success": false,
            "attemptCount": 3,
            "deliveredAt": "2025-01-01T00:00:00Z",
            "responseBody": "bad gateway"
        }))
        .expect("decode");

        assert_eq!(entry.attempt_count, 3);
        assert_eq!(entry.status_code, Some(502));
        assert!(!entry.success);
        assert!(entry.delivered_at.is_some());
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let entry: DeliveryLogEntry = serde_json::from_value(json!({
            "deliveryId": "d-2",
            "eventType": "DELETED",
            "webhookUrl": "https://hooks.example.com/in",
            "success": true
        }))
        .expect("decode");
        assert!(entry.object_id.is_none());
        assert_eq!(entry.attempt_count, 0);
    }
}
