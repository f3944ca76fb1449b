use thiserror::Error;

use crate::kind::ReportKind;

/// Unified error type for the adsnap workspace.
///
/// Transport-level failures, snapshot lifecycle failures, and argument
/// validation all surface through this enum. The aggregator converts
/// everything except [`ReportError::Auth`] into a missing slot in the
/// composite result; `Auth` aborts the whole request because no sibling
/// report type can succeed without valid credentials.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Credentials were rejected by the platform (HTTP 401). Not retryable.
    #[error("authentication rejected by the ad platform")]
    Auth,

    /// The platform throttled the request (HTTP 429). Retry is the caller's
    /// responsibility; this client does not retry on its own.
    #[error("rate limited by the ad platform")]
    RateLimited,

    /// A requested remote resource does not exist (HTTP 404).
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "snapshot 42".
        what: String,
    },

    /// The platform could not be reached at the transport level.
    #[error("connectivity failure: {0}")]
    Connectivity(String),

    /// The platform answered with an unexpected non-2xx status.
    #[error("remote api error (status {status}): {msg}")]
    Remote {
        /// HTTP status code returned by the platform.
        status: u16,
        /// Best-effort message extracted from the response body.
        msg: String,
    },

    /// The snapshot job reported failure, or creation returned no identifier.
    #[error("snapshot failed for {report} report")]
    SnapshotFailed {
        /// Report kind whose snapshot failed.
        report: ReportKind,
    },

    /// The snapshot did not complete within the configured maximum wait.
    #[error("snapshot timed out for {report} report")]
    SnapshotTimeout {
        /// Report kind whose snapshot timed out.
        report: ReportKind,
    },

    /// No report model could be resolved or created for this kind.
    #[error("report model not available for {report} report")]
    NotAvailable {
        /// Report kind whose model resolution failed.
        report: ReportKind,
    },

    /// Issues with returned data (unparseable payload, missing fields).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl ReportError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Remote` error from a status code and message.
    pub fn remote(status: u16, msg: impl Into<String>) -> Self {
        Self::Remote {
            status,
            msg: msg.into(),
        }
    }

    /// Helper: build a `SnapshotFailed` error for a report kind.
    #[must_use]
    pub const fn snapshot_failed(report: ReportKind) -> Self {
        Self::SnapshotFailed { report }
    }

    /// Helper: build a `SnapshotTimeout` error for a report kind.
    #[must_use]
    pub const fn snapshot_timeout(report: ReportKind) -> Self {
        Self::SnapshotTimeout { report }
    }

    /// Helper: build a `NotAvailable` error for a report kind.
    #[must_use]
    pub const fn not_available(report: ReportKind) -> Self {
        Self::NotAvailable { report }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// True for failures that invalidate every sibling report type, not just
    /// the one in flight. The aggregator re-raises these instead of settling
    /// them into a missing slot.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }
}
