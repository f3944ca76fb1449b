use crate::RawRow;
use crate::types::GeoFenceRecord;

// Candidate keys in priority order; older API versions report the bare
// names, newer ones qualify them with the source view.
const ID: &[&str] = &[
    "dim_geo_fence.geo_fence_id",
    "summary_delivery_events.geo_fence_id",
    "geo_fence_id",
];
const NAME: &[&str] = &[
    "dim_geo_fence.geo_fence_name",
    "summary_delivery_events.geo_fence_name",
    "geo_fence_name",
];
const IMPRESSIONS: &[&str] = &["summary_delivery_events.impressions", "impressions"];
const CLICKS: &[&str] = &["summary_delivery_events.clicks", "clicks"];
const SPEND: &[&str] = &[
    "summary_delivery_events.total_spend",
    "summary_delivery_events.spend",
    "total_spend",
];

/// Normalize geo-fence rows, dropping rows without a fence identifier.
#[must_use]
pub fn from_rows(rows: &[RawRow]) -> Vec<GeoFenceRecord> {
    rows.iter().filter_map(from_row).collect()
}

fn from_row(row: &RawRow) -> Option<GeoFenceRecord> {
    let geo_fence_id = row.str_at(ID)?;
    let impressions = row.u64_at(IMPRESSIONS);
    let clicks = row.u64_at(CLICKS);
    Some(GeoFenceRecord {
        name: row.str_at(NAME).unwrap_or_else(|| geo_fence_id.clone()),
        geo_fence_id,
        impressions,
        clicks,
        ctr: super::ctr(clicks, impressions),
        spend: row.f64_at(SPEND),
    })
}
