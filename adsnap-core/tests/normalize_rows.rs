use adsnap_core::normalize::{conversions, devices, domains, geo_fence, keywords, location};
use adsnap_core::raw::parse_rows;
use serde_json::json;

#[test]
fn geo_fence_drops_rows_without_identifier() {
    let rows = parse_rows(&json!([
        {
            "dim_geo_fence.geo_fence_id": 101,
            "dim_geo_fence.geo_fence_name": "Store North",
            "summary_delivery_events.impressions": 4000,
            "summary_delivery_events.clicks": 20,
            "summary_delivery_events.total_spend": 18.5
        },
        {
            // No fence id anywhere: must be filtered out.
            "summary_delivery_events.impressions": 999,
            "summary_delivery_events.clicks": 9
        },
        {
            "geo_fence_id": "102",
            "geo_fence_name": "Store South",
            "impressions": "1000",
            "clicks": "5"
        }
    ]));

    let records = geo_fence::from_rows(&rows);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].geo_fence_id, "101");
    assert_eq!(records[0].name, "Store North");
    assert_eq!(records[0].impressions, 4000);
    assert!((records[0].ctr - 0.5).abs() < 1e-9);
    assert!((records[0].spend - 18.5).abs() < 1e-9);
    // Legacy bare field names resolve through the fallback chain.
    assert_eq!(records[1].geo_fence_id, "102");
    assert_eq!(records[1].impressions, 1000);
}

#[test]
fn geo_fence_name_falls_back_to_identifier() {
    let rows = parse_rows(&json!([{"geo_fence_id": "77", "impressions": 10}]));
    let records = geo_fence::from_rows(&rows);
    assert_eq!(records[0].name, "77");
}

#[test]
fn location_spend_is_reconstructed_from_ecpm() {
    let rows = parse_rows(&json!([{
        "dim_city.city_name": "Austin",
        "summary_delivery_events.impressions": 2000,
        "summary_delivery_events.clicks": 10,
        "summary_delivery_events.ecpm": 5.0
    }]));

    let records = location::from_rows(&rows);
    assert_eq!(records.len(), 1);
    // (2000 / 1000) * 5.0
    assert!((records[0].spend - 10.0).abs() < 1e-9);
}

#[test]
fn location_requires_some_dimension() {
    let rows = parse_rows(&json!([
        {"summary_delivery_events.impressions": 500},
        {"dim_metro.metro_name": "Dallas-Ft. Worth", "impressions": 300},
        {"region": "TX", "impressions": 200}
    ]));

    let records = location::from_rows(&rows);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].metro.as_deref(), Some("Dallas-Ft. Worth"));
    assert!(records[0].city.is_none());
    assert_eq!(records[1].region.as_deref(), Some("TX"));
}

#[test]
fn conversions_aggregate_across_all_rows() {
    let rows = parse_rows(&json!([
        {"summary_delivery_events.conversions": 3, "summary_delivery_events.view_through_conversions": 2},
        {"summary_delivery_events.conversions": 5, "summary_delivery_events.click_through_conversions": 4},
        {"summary_delivery_events.conversions": 2, "summary_delivery_events.view_through_conversions": 1}
    ]));

    let summary = conversions::summarize(&rows);
    assert_eq!(summary.total_conversions, 10);
    assert_eq!(summary.view_conversions, 3);
    assert_eq!(summary.click_conversions, 4);
}

#[test]
fn device_rows_keep_reported_spend() {
    let rows = parse_rows(&json!([
        {"dim_device_type.device_type_name": "Mobile", "impressions": 8000, "clicks": 80, "total_spend": 40.0},
        {"device_type": "Desktop", "impressions": 2000, "clicks": 10, "total_spend": 12.0},
        {"impressions": 50}
    ]));

    let records = devices::from_rows(&rows);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].device_type, "Mobile");
    assert!((records[0].ctr - 1.0).abs() < 1e-9);
    assert!((records[1].spend - 12.0).abs() < 1e-9);
}

#[test]
fn domains_sort_descending_by_impressions() {
    let rows = parse_rows(&json!([
        {"dim_domain.domain_name": "small.example", "impressions": 100},
        {"dim_domain.domain_name": "big.example", "impressions": 9000},
        {"dim_domain.domain_name": "mid.example", "impressions": 4500}
    ]));

    let records = domains::from_rows(&rows);
    let order: Vec<&str> = records.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(order, vec!["big.example", "mid.example", "small.example"]);
}

#[test]
fn keyword_field_fallback_order_is_honored() {
    // When both the reporting name and the legacy keyword field are present,
    // the reporting name wins.
    let rows = parse_rows(&json!([{
        "summary_delivery_events.keyword_reporting_name": "running shoes",
        "summary_delivery_events.keyword": "shoes",
        "summary_delivery_events.impressions": 2000,
        "summary_delivery_events.ecpm": 5.0
    }]));

    let records = keywords::from_rows(&rows);
    assert_eq!(records[0].keyword, "running shoes");
    assert!((records[0].spend - 10.0).abs() < 1e-9);
}

#[test]
fn keyword_rows_without_text_are_dropped() {
    let rows = parse_rows(&json!([
        {"summary_delivery_events.impressions": 100},
        {"dim_keyword.keyword": "trail mix", "impressions": 10, "clicks": 1}
    ]));

    let records = keywords::from_rows(&rows);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].keyword, "trail mix");
    assert!((records[0].ctr - 10.0).abs() < 1e-9);
}
