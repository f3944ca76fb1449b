//! adsnap-http
//!
//! Production [`ReportTransport`] backed by `reqwest`. Binds the ad
//! platform's API root and attaches the two credential headers on every
//! request; translates transport-level failures into the [`ReportError`]
//! taxonomy. Retry policy belongs to callers, never to this layer.
#![warn(missing_docs)]

/// Builder for [`HttpTransport`].
pub mod builder;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use adsnap_core::{ReportError, ReportTransport};

pub use builder::HttpTransportBuilder;

/// Header carrying the application API key.
pub const APP_KEY_HEADER: &str = "X-App-Key";
/// Header carrying the user API key.
pub const USER_KEY_HEADER: &str = "X-User-Key";

/// HTTP client bound to the platform's API root.
///
/// Stateless aside from connection configuration; cheap to share behind an
/// `Arc`. Construct with [`HttpTransport::builder`].
#[derive(Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    app_key: String,
    user_key: String,
}

impl HttpTransport {
    /// Start building a transport for the given API root and credentials.
    #[must_use]
    pub fn builder(
        base_url: impl Into<String>,
        app_key: impl Into<String>,
        user_key: impl Into<String>,
    ) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url, app_key, user_key)
    }

    pub(crate) const fn from_parts(
        http: reqwest::Client,
        base_url: Url,
        app_key: String,
        user_key: String,
    ) -> Self {
        Self {
            http,
            base_url,
            app_key,
            user_key,
        }
    }

    /// Resolve a request path against the API root.
    ///
    /// Download links occasionally arrive as absolute URLs; those pass
    /// through untouched. Relative paths are joined under the configured
    /// base regardless of a leading slash.
    fn url_for(&self, path: &str) -> Result<Url, ReportError> {
        if let Ok(absolute) = Url::parse(path)
            && !absolute.cannot_be_a_base()
        {
            return Ok(absolute);
        }
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ReportError::invalid_arg(format!("bad request path {path:?}: {e}")))
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(APP_KEY_HEADER, &self.app_key)
            .header(USER_KEY_HEADER, &self.user_key)
    }

    async fn dispatch(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<Value, ReportError> {
        let resp = self.apply_auth(req).send().await.map_err(|e| {
            tracing::debug!(error = %e, path, "transport failure");
            ReportError::Connectivity(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if status.is_success() {
            if body.is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&body).map_err(|e| {
                ReportError::Data(format!("unparseable response for {path}: {e}"))
            });
        }

        Err(match status.as_u16() {
            401 => ReportError::Auth,
            429 => ReportError::RateLimited,
            404 => ReportError::not_found(path.to_string()),
            code => ReportError::remote(code, error_message(&body, status)),
        })
    }
}

/// Best-effort extraction of a human-readable message from an error body.
///
/// The platform has used `error`, `message`, and an `errors` array across
/// endpoints; fall back to the raw body, then the status reason.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = parsed.get(key).and_then(Value::as_str) {
                return msg.to_string();
            }
        }
        if let Some(msg) = parsed
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|a| a.first())
            .and_then(Value::as_str)
        {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[async_trait]
impl ReportTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, ReportError> {
        let url = self.url_for(path)?;
        self.dispatch(path, self.http.get(url)).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ReportError> {
        let url = self.url_for(path)?;
        self.dispatch(path, self.http.post(url).json(body)).await
    }

    fn name(&self) -> &'static str {
        "adsnap-http"
    }
}
