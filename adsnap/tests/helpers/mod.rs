// Re-export helpers so tests can `use helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use adsnap::{DateRange, ReportCenter};
use adsnap_mock::MockPlatform;

/// Common scope constants used across tests.
pub const ORG: &str = "5501";
pub const CAMPAIGN: &str = "90210";

/// A March 2025 range; the exact dates are irrelevant to the orchestration
/// under test.
pub fn range() -> DateRange {
    DateRange::new(
        chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    )
    .unwrap()
}

/// Center with the default 2s/60s timing against the given platform.
pub fn center(platform: &Arc<MockPlatform>) -> ReportCenter {
    ReportCenter::builder()
        .transport(platform.clone())
        .build()
        .unwrap()
}

/// Center with custom polling cadence and deadline.
pub fn center_with_timing(
    platform: &Arc<MockPlatform>,
    poll_interval: Duration,
    max_wait: Duration,
) -> ReportCenter {
    ReportCenter::builder()
        .transport(platform.clone())
        .poll_interval(poll_interval)
        .max_wait(max_wait)
        .build()
        .unwrap()
}

/* ---------- Row fixtures, one per report kind ---------- */

pub fn geo_row(id: u64, imps: u64) -> Value {
    json!({
        "dim_geo_fence.geo_fence_id": id,
        "dim_geo_fence.geo_fence_name": format!("Fence {id}"),
        "summary_delivery_events.impressions": imps,
        "summary_delivery_events.clicks": imps / 100,
        "summary_delivery_events.total_spend": imps as f64 / 500.0
    })
}

pub fn location_row(city: &str, imps: u64) -> Value {
    json!({
        "dim_city.city_name": city,
        "summary_delivery_events.impressions": imps,
        "summary_delivery_events.clicks": imps / 100,
        "summary_delivery_events.ecpm": 4.0
    })
}

pub fn conversion_row(total: u64) -> Value {
    json!({ "summary_delivery_events.conversions": total })
}

pub fn device_row(device: &str, imps: u64) -> Value {
    json!({
        "dim_device_type.device_type_name": device,
        "summary_delivery_events.impressions": imps,
        "summary_delivery_events.clicks": imps / 50,
        "summary_delivery_events.total_spend": imps as f64 / 250.0
    })
}

pub fn viewability_row() -> Value {
    json!({
        "summary_viewability.measured_impressions": 10_000,
        "summary_viewability.viewable_impressions": 6_500,
        "summary_viewability.viewability_rate": 65.0
    })
}

pub fn domain_row(domain: &str, imps: u64) -> Value {
    json!({
        "dim_domain.domain_name": domain,
        "summary_delivery_events.impressions": imps,
        "summary_delivery_events.clicks": imps / 200,
        "summary_delivery_events.total_spend": imps as f64 / 400.0
    })
}

pub fn keyword_row(keyword: &str, imps: u64) -> Value {
    json!({
        "summary_delivery_events.keyword_reporting_name": keyword,
        "summary_delivery_events.impressions": imps,
        "summary_delivery_events.clicks": imps / 100,
        "summary_delivery_events.ecpm": 5.0
    })
}
