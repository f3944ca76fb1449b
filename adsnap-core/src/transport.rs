use async_trait::async_trait;
use serde_json::Value;

use crate::ReportError;

/// Contract for issuing authenticated requests against the ad platform's
/// Report Center API.
///
/// Implementations are stateless aside from connection configuration: the
/// production transport binds a base URL and attaches credential headers on
/// every request, while test fakes script responses in memory. Paths are
/// relative to the platform's API root (e.g.
/// `/organizations/42/report_center/reports`); responses are raw JSON.
///
/// No retry happens at this layer. Retry and failure-isolation policy belong
/// to the orchestrator above.
#[async_trait]
pub trait ReportTransport: Send + Sync {
    /// Issue a GET request for the given relative path.
    async fn get(&self, path: &str) -> Result<Value, ReportError>;

    /// Issue a POST request with a JSON body for the given relative path.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ReportError>;

    /// Short name used for log attribution.
    fn name(&self) -> &'static str;
}
