use std::sync::Arc;
use std::time::Duration;

use adsnap_core::{ReportError, ReportTransport};

use crate::resolver::ModelResolver;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(60);
const DEFAULT_MODEL_PAGE_SIZE: usize = 100;

/// Client for the platform's Report Center.
///
/// Owns the transport, the process-lifetime report-model cache, and the
/// snapshot timing configuration. One instance serves any number of
/// organizations and campaigns; share it behind an `Arc` if needed (all
/// methods take `&self`).
pub struct ReportCenter {
    pub(crate) transport: Arc<dyn ReportTransport>,
    pub(crate) resolver: ModelResolver,
    pub(crate) poll_interval: Duration,
    pub(crate) max_wait: Duration,
}

/// Builder for constructing a [`ReportCenter`] with custom configuration.
pub struct ReportCenterBuilder {
    transport: Option<Arc<dyn ReportTransport>>,
    poll_interval: Duration,
    max_wait: Duration,
    model_page_size: usize,
}

impl Default for ReportCenterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportCenterBuilder {
    /// Create a new builder with the default timing configuration:
    /// 2-second poll interval, 60-second snapshot cap, model listing page
    /// size of 100.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transport: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
            model_page_size: DEFAULT_MODEL_PAGE_SIZE,
        }
    }

    /// Set the transport used for every remote call. Required.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn ReportTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Interval between snapshot status polls.
    ///
    /// Behavior and trade-offs:
    /// - A shorter interval shaves latency off short jobs at the cost of more
    ///   status requests against the platform's rate budget.
    /// - The interval is fixed, not backed off: snapshot durations are
    ///   typically tens of seconds and a fixed cadence keeps behavior
    ///   predictable.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Maximum time to wait for one snapshot to complete.
    ///
    /// On expiry the snapshot is abandoned and the report type surfaces a
    /// timeout; concurrent sibling report types are unaffected. Because
    /// report types run in parallel, this is also the effective upper bound
    /// of a whole composite fetch.
    #[must_use]
    pub const fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Page size used when listing existing remote report models during
    /// resolution. Organizations hold few models, so one page suffices.
    #[must_use]
    pub const fn model_page_size(mut self, size: usize) -> Self {
        self.model_page_size = size;
        self
    }

    /// Build the [`ReportCenter`].
    ///
    /// # Errors
    /// Returns `InvalidArg` if no transport was supplied, or if either timing
    /// parameter is zero.
    pub fn build(self) -> Result<ReportCenter, ReportError> {
        let transport = self.transport.ok_or_else(|| {
            ReportError::invalid_arg("no transport configured; set one via transport(...)")
        })?;
        if self.poll_interval.is_zero() {
            return Err(ReportError::invalid_arg("poll interval must be non-zero"));
        }
        if self.max_wait.is_zero() {
            return Err(ReportError::invalid_arg("max wait must be non-zero"));
        }
        Ok(ReportCenter {
            resolver: ModelResolver::new(Arc::clone(&transport), self.model_page_size),
            transport,
            poll_interval: self.poll_interval,
            max_wait: self.max_wait,
        })
    }
}

impl ReportCenter {
    /// Start building a new `ReportCenter` instance.
    #[must_use]
    pub fn builder() -> ReportCenterBuilder {
        ReportCenterBuilder::new()
    }
}
