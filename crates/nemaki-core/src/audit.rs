//! Audit metrics reported by the server's audit logger.

use serde::{Deserialize, Serialize};

/// Raw event counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub logged: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub failed: u64,
}

impl AuditCounts {
    /// Derive ratios locally. `None` when no events were recorded.
    #[must_use]
    pub fn rates(&self) -> Option<AuditRates> {
        if self.total == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = |n: u64| n as f64 / self.total as f64;
        Some(AuditRates {
            log_rate: Some(ratio(self.logged)),
            skip_rate: Some(ratio(self.skipped)),
            failure_rate: Some(ratio(self.failed)),
        })
    }
}

/// Ratios over `total`. The server omits the block when `total == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRates {
    pub log_rate: Option<f64>,
    pub skip_rate: Option<f64>,
    pub failure_rate: Option<f64>,
}

/// Response of `GET /audit/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMetrics {
    pub metrics: AuditCounts,
    pub rates: Option<AuditRates>,
    #[serde(default)]
    pub enabled: bool,
    pub read_audit_level: Option<String>,
    /// Epoch milliseconds.
    pub timestamp: Option<i64>,
}

impl AuditMetrics {
    /// Server-provided rates, or rates derived from the counters.
    #[must_use]
    pub fn effective_rates(&self) -> Option<AuditRates> {
        self.rates.or_else(|| self.metrics.rates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn derives_rates_when_server_omits_them() {
        let metrics: AuditMetrics = serde_json::from_value(json!({
            "metrics": {"total": 4, "logged": 2, "skipped": 1, "failed": 1},
            "enabled": true,
            "readAuditLevel": "DOWNLOAD",
            "timestamp": 1_700_000_000_000_i64
        }))
        .expect("decode");

        let rates = metrics.effective_rates().expect("rates");
        assert_eq!(rates.log_rate, Some(0.5));
        assert_eq!(rates.failure_rate, Some(0.25));
    }

    #[test]
    fn zero_total_has_no_rates() {
        assert!(AuditCounts::default().rates().is_none());
    }
}
