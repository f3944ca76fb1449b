//! adsnap orchestrates asynchronous report snapshots against an ad
//! platform's Report Center API.
//!
//! Overview
//! - Resolves (or creates) remote report models per organization and report
//!   kind, memoizing resolved ids for the process lifetime.
//! - Runs snapshot computations end to end: trigger, fixed-interval status
//!   polling under a hard deadline, then row download.
//! - Normalizes raw platform rows into stable typed records, tolerating the
//!   platform's shifting field names through ordered candidate lookups.
//! - Fans out a configurable set of report types concurrently per campaign
//!   and assembles a composite result that is robust to partial failure: a
//!   failed report type becomes an empty slot plus a warning, never an error
//!   for its siblings.
//!
//! Key behaviors and trade-offs
//! - Polling is a fixed 2-second cadence with a 60-second cap by default;
//!   snapshot jobs finish in tens of seconds, so a fixed interval keeps
//!   latency predictable and the state machine trivial to test. Both knobs
//!   sit on the builder.
//! - A snapshot that fails or times out is abandoned; retrying means
//!   creating a fresh snapshot. The client never re-polls a dead job.
//! - Authentication failures are the one exception to failure isolation:
//!   without valid credentials no sibling can succeed, so the composite
//!   fetch re-raises them instead of settling slots to `None`.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use adsnap::{DateRange, ReportCenter, ReportOptions};
//!
//! let transport = Arc::new(
//!     adsnap_http::HttpTransport::builder(base_url, app_key, user_key).build()?,
//! );
//! let center = ReportCenter::builder().transport(transport).build()?;
//!
//! let range = DateRange::new(start, end)?;
//! let report = center
//!     .enhanced_campaign_data("5501", "90210", range, ReportOptions::default())
//!     .await?;
//! if let Some(domains) = &report.domains {
//!     // highest-impression domains first
//! }
//! ```
//!
//! See `adsnap/examples/` for runnable end-to-end demonstrations against the
//! in-memory mock platform.
#![warn(missing_docs)]

mod center;
mod reports;
mod resolver;
mod snapshot;

pub use center::{ReportCenter, ReportCenterBuilder};

// Re-export core types for convenience
pub use adsnap_core::{
    CampaignReport, ConversionSummary, DateRange, DeviceRecord, DomainRecord, GeoFenceRecord,
    KeywordRecord, LocationRecord, RawRow, ReportError, ReportKind, ReportOptions,
    ReportTransport, SnapshotFilters, ViewabilitySummary,
};
