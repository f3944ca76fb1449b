//! adsnap-core
//!
//! Core types shared across the adsnap workspace.
//!
//! - `error`: the unified [`ReportError`] taxonomy.
//! - `transport`: the [`ReportTransport`] trait implemented by the HTTP
//!   client and by test fakes.
//! - `kind`: the fixed set of report types and their platform template ids.
//! - `filters`: snapshot filter construction (date range + campaign scope).
//! - `raw`: tolerant access to raw platform rows with ordered field fallback.
//! - `types`: normalized record shapes and the composite campaign report.
//! - `normalize`: pure per-report-type row normalizers.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: the
//! [`ReportTransport`] trait is an `async_trait` contract consumed through
//! `Arc<dyn ReportTransport>` by the `adsnap` orchestrator, which drives its
//! polling loops and fan-out with Tokio timers and join primitives.
#![warn(missing_docs)]

/// Unified error taxonomy for the adsnap workspace.
pub mod error;
/// Snapshot filter construction: date ranges and campaign scoping.
pub mod filters;
/// Report kinds and their fixed platform template identifiers.
pub mod kind;
/// Pure normalizers mapping raw platform rows into typed records.
pub mod normalize;
/// Tolerant raw-row access with ordered candidate-key fallback.
pub mod raw;
/// The transport contract against the ad platform's Report Center API.
pub mod transport;
/// Normalized record shapes and the composite campaign report.
pub mod types;

pub use error::ReportError;
pub use filters::{DateRange, SnapshotFilters};
pub use kind::ReportKind;
pub use raw::RawRow;
pub use transport::ReportTransport;
pub use types::{
    CampaignReport, ConversionSummary, DeviceRecord, DomainRecord, GeoFenceRecord, KeywordRecord,
    LocationRecord, ReportOptions, ViewabilitySummary,
};
