//! HTTP client for the analytics and automation collaborators.
//!
//! Each call is a single bounded POST. There is no retry: these endpoints
//! are best-effort side effects and the caller treats a timeout the same
//! as any other failure.

use std::time::Duration;

use serde::Serialize;
use tempo_core::types::DbId;

use crate::OutboundConfig;

/// Error type for outbound collaborator calls.
#[derive(Debug, thiserror::Error)]
pub enum OutboundError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Collaborator returned HTTP {0}")]
    HttpStatus(u16),
}

/// Payload sent to the analytics collaborator after a decision.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsPayload {
    pub timesheet_id: DbId,
    pub action: String,
    pub approver_id: DbId,
    pub employee_id: DbId,
    pub project_id: Option<DbId>,
}

/// Payload sent to the automation collaborator after an approval.
#[derive(Debug, Clone, Serialize)]
pub struct AutomationPayload {
    pub timesheet_id: DbId,
    pub employee_id: DbId,
    pub project_id: Option<DbId>,
    pub hours_worked: f64,
    pub billable_hours: f64,
}

/// Fire-and-forget client for both collaborators.
pub struct OutboundClient {
    client: reqwest::Client,
    config: OutboundConfig,
}

impl OutboundClient {
    /// Create a client with a pre-configured request timeout.
    pub fn new(config: OutboundConfig) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs.max(1));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// POST the decision to `<analytics-base>/analyze-approval`.
    ///
    /// A no-op when no analytics base URL is configured.
    pub async fn notify_analytics(&self, payload: &AnalyticsPayload) -> Result<(), OutboundError> {
        let Some(base) = &self.config.analytics_base_url else {
            tracing::debug!("Analytics collaborator not configured, skipping");
            return Ok(());
        };
        self.post(&format!("{base}/analyze-approval"), payload).await
    }

    /// POST the approval to `<automation-base>/post-approval`.
    ///
    /// A no-op when no automation base URL is configured.
    pub async fn trigger_automation(
        &self,
        payload: &AutomationPayload,
    ) -> Result<(), OutboundError> {
        let Some(base) = &self.config.automation_base_url else {
            tracing::debug!("Automation collaborator not configured, skipping");
            return Ok(());
        };
        self.post(&format!("{base}/post-approval"), payload).await
    }

    /// Execute a single POST request and check the response status.
    async fn post<T: Serialize>(&self, url: &str, payload: &T) -> Result<(), OutboundError> {
        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(OutboundError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _client = OutboundClient::new(OutboundConfig::default());
    }

    #[test]
    fn outbound_error_display_http_status() {
        let err = OutboundError::HttpStatus(502);
        assert_eq!(err.to_string(), "Collaborator returned HTTP 502");
    }

    #[tokio::test]
    async fn unconfigured_collaborators_are_skipped() {
        let client = OutboundClient::new(OutboundConfig::default());

        let analytics = AnalyticsPayload {
            timesheet_id: 1,
            action: "approved".to_string(),
            approver_id: 2,
            employee_id: 3,
            project_id: None,
        };
        assert!(client.notify_analytics(&analytics).await.is_ok());

        let automation = AutomationPayload {
            timesheet_id: 1,
            employee_id: 3,
            project_id: None,
            hours_worked: 8.0,
            billable_hours: 6.0,
        };
        assert!(client.trigger_automation(&automation).await.is_ok());
    }

    #[tokio::test]
    async fn unreachable_collaborator_reports_failure() {
        // Port 1 is reserved and should refuse connections immediately.
        let config = OutboundConfig {
            analytics_base_url: Some("http://127.0.0.1:1".to_string()),
            automation_base_url: None,
            request_timeout_secs: 1,
        };
        let client = OutboundClient::new(config);

        let payload = AnalyticsPayload {
            timesheet_id: 1,
            action: "approved".to_string(),
            approver_id: 2,
            employee_id: 3,
            project_id: Some(4),
        };
        assert!(client.notify_analytics(&payload).await.is_err());
    }
}
