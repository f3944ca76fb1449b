use crate::RawRow;
use crate::types::LocationRecord;

const CITY: &[&str] = &[
    "dim_city.city_name",
    "summary_delivery_events.city_name",
    "city",
];
const METRO: &[&str] = &[
    "dim_metro.metro_name",
    "summary_delivery_events.metro_name",
    "metro",
];
const REGION: &[&str] = &[
    "dim_region.region_name",
    "summary_delivery_events.region_name",
    "region",
];
const IMPRESSIONS: &[&str] = &["summary_delivery_events.impressions", "impressions"];
const CLICKS: &[&str] = &["summary_delivery_events.clicks", "clicks"];
const ECPM: &[&str] = &["summary_delivery_events.ecpm", "ecpm"];

/// Normalize location rows.
///
/// A row must carry at least one location dimension (city, metro, or region)
/// to survive. Spend is reconstructed from impressions and eCPM; this
/// template does not report spend directly.
#[must_use]
pub fn from_rows(rows: &[RawRow]) -> Vec<LocationRecord> {
    rows.iter().filter_map(from_row).collect()
}

fn from_row(row: &RawRow) -> Option<LocationRecord> {
    let city = row.str_at(CITY);
    let metro = row.str_at(METRO);
    let region = row.str_at(REGION);
    if city.is_none() && metro.is_none() && region.is_none() {
        return None;
    }
    let impressions = row.u64_at(IMPRESSIONS);
    let clicks = row.u64_at(CLICKS);
    Some(LocationRecord {
        city,
        metro,
        region,
        impressions,
        clicks,
        ctr: super::ctr(clicks, impressions),
        spend: super::spend_from_ecpm(impressions, row.f64_at(ECPM)),
    })
}
