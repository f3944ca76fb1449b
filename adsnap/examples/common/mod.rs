use std::sync::Arc;

use adsnap_core::{ReportKind, ReportTransport};
use serde_json::json;

/// A scripted platform with plausible data for every report kind, so the
/// examples run offline and deterministically.
#[must_use]
pub fn demo_platform() -> Arc<dyn ReportTransport> {
    adsnap_mock::MockPlatform::builder()
        .with_rows(
            ReportKind::GeoFence,
            vec![
                json!({
                    "dim_geo_fence.geo_fence_id": 101,
                    "dim_geo_fence.geo_fence_name": "Downtown Store",
                    "summary_delivery_events.impressions": 42_000,
                    "summary_delivery_events.clicks": 310,
                    "summary_delivery_events.total_spend": 168.4
                }),
                json!({
                    "dim_geo_fence.geo_fence_id": 102,
                    "dim_geo_fence.geo_fence_name": "Airport",
                    "summary_delivery_events.impressions": 18_500,
                    "summary_delivery_events.clicks": 95,
                    "summary_delivery_events.total_spend": 74.0
                }),
            ],
        )
        .with_rows(
            ReportKind::Location,
            vec![json!({
                "dim_city.city_name": "Austin",
                "dim_region.region_name": "TX",
                "summary_delivery_events.impressions": 60_000,
                "summary_delivery_events.clicks": 420,
                "summary_delivery_events.ecpm": 4.25
            })],
        )
        .with_rows(
            ReportKind::Conversions,
            vec![
                json!({"summary_delivery_events.conversions": 12,
                       "summary_delivery_events.view_through_conversions": 8,
                       "summary_delivery_events.click_through_conversions": 4}),
                json!({"summary_delivery_events.conversions": 5,
                       "summary_delivery_events.view_through_conversions": 3,
                       "summary_delivery_events.click_through_conversions": 2}),
            ],
        )
        .with_rows(
            ReportKind::Devices,
            vec![
                json!({"dim_device_type.device_type_name": "Mobile",
                       "summary_delivery_events.impressions": 80_000,
                       "summary_delivery_events.clicks": 640,
                       "summary_delivery_events.total_spend": 320.0}),
                json!({"dim_device_type.device_type_name": "Desktop",
                       "summary_delivery_events.impressions": 20_000,
                       "summary_delivery_events.clicks": 110,
                       "summary_delivery_events.total_spend": 95.0}),
            ],
        )
        .with_rows(
            ReportKind::Viewability,
            vec![json!({"summary_viewability.measured_impressions": 95_000,
                        "summary_viewability.viewable_impressions": 61_750,
                        "summary_viewability.viewability_rate": 65.0})],
        )
        .with_rows(
            ReportKind::Domains,
            vec![
                json!({"dim_domain.domain_name": "news.example",
                       "summary_delivery_events.impressions": 33_000,
                       "summary_delivery_events.clicks": 180,
                       "summary_delivery_events.total_spend": 120.0}),
                json!({"dim_domain.domain_name": "games.example",
                       "summary_delivery_events.impressions": 51_000,
                       "summary_delivery_events.clicks": 260,
                       "summary_delivery_events.total_spend": 190.0}),
            ],
        )
        .with_rows(
            ReportKind::Keywords,
            vec![json!({"summary_delivery_events.keyword_reporting_name": "running shoes",
                        "summary_delivery_events.impressions": 14_000,
                        "summary_delivery_events.clicks": 120,
                        "summary_delivery_events.ecpm": 5.5})],
        )
        .build()
}
