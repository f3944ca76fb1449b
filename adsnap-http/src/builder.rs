use std::time::Duration;

use url::Url;

use adsnap_core::ReportError;

use crate::HttpTransport;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`HttpTransport`].
///
/// Only the API root and the two credential keys are required; the HTTP
/// client and per-request timeout have conservative defaults.
pub struct HttpTransportBuilder {
    base_url: String,
    app_key: String,
    user_key: String,
    client: Option<reqwest::Client>,
    request_timeout: Duration,
}

impl HttpTransportBuilder {
    /// Create a builder for the given API root and credentials.
    pub fn new(
        base_url: impl Into<String>,
        app_key: impl Into<String>,
        user_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_key: app_key.into(),
            user_key: user_key.into(),
            client: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS settings, etc.).
    ///
    /// A supplied client keeps its own timeout configuration; the builder's
    /// [`request_timeout`](Self::request_timeout) is ignored in that case.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Per-request timeout for the default client. This bounds one HTTP
    /// round-trip, not a whole snapshot poll loop.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse, cannot serve as a
    /// base, or if either credential key is empty.
    pub fn build(self) -> Result<HttpTransport, ReportError> {
        if self.app_key.trim().is_empty() || self.user_key.trim().is_empty() {
            return Err(ReportError::invalid_arg(
                "both credential keys must be non-empty",
            ));
        }

        // Url::join treats a base without a trailing slash as a file path
        // and would drop its last segment, so normalize here.
        let mut raw = self.base_url;
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)
            .map_err(|e| ReportError::invalid_arg(format!("bad base url {raw:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ReportError::invalid_arg(format!(
                "base url {base_url} cannot serve as an api root"
            )));
        }

        let http = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.request_timeout)
                .build()
                .map_err(|e| ReportError::Connectivity(e.to_string()))?,
        };

        Ok(HttpTransport::from_parts(
            http,
            base_url,
            self.app_key,
            self.user_key,
        ))
    }
}
