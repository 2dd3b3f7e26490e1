//! Outbound HTTP collaborators for the approval workflow.
//!
//! Two fire-and-forget endpoints are called after a decision is durable:
//! the analytics collaborator (`/analyze-approval`) and the downstream
//! automation collaborator (`/post-approval`). Both are best-effort; a
//! failure is logged by the caller and never affects the decision result.

mod client;

pub use client::{AnalyticsPayload, AutomationPayload, OutboundClient, OutboundError};

/// Configuration for the outbound collaborators.
///
/// Base URLs are optional: when one is unset the corresponding call is
/// skipped entirely (logged at debug level).
#[derive(Debug, Clone, Default)]
pub struct OutboundConfig {
    /// Base URL of the analytics collaborator, e.g. `http://analytics:8080`.
    pub analytics_base_url: Option<String>,
    /// Base URL of the automation collaborator, e.g. `http://automation:8080`.
    pub automation_base_url: Option<String>,
    /// Per-request timeout in seconds (default: 10).
    pub request_timeout_secs: u64,
}

impl OutboundConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                        | Default  |
    /// |--------------------------------|----------|
    /// | `ANALYTICS_BASE_URL`           | unset    |
    /// | `AUTOMATION_BASE_URL`          | unset    |
    /// | `OUTBOUND_REQUEST_TIMEOUT_SECS`| `10`     |
    pub fn from_env() -> Self {
        let analytics_base_url = std::env::var("ANALYTICS_BASE_URL").ok().filter(|s| !s.is_empty());
        let automation_base_url = std::env::var("AUTOMATION_BASE_URL").ok().filter(|s| !s.is_empty());

        let request_timeout_secs: u64 = std::env::var("OUTBOUND_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("OUTBOUND_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            analytics_base_url,
            automation_base_url,
            request_timeout_secs,
        }
    }
}
