use crate::RawRow;
use crate::types::DeviceRecord;

const DEVICE: &[&str] = &[
    "dim_device_type.device_type_name",
    "summary_delivery_events.device_type",
    "device_type",
];
const IMPRESSIONS: &[&str] = &["summary_delivery_events.impressions", "impressions"];
const CLICKS: &[&str] = &["summary_delivery_events.clicks", "clicks"];
const SPEND: &[&str] = &[
    "summary_delivery_events.total_spend",
    "summary_delivery_events.spend",
    "total_spend",
];

/// Normalize device breakdown rows, dropping rows without a device type.
#[must_use]
pub fn from_rows(rows: &[RawRow]) -> Vec<DeviceRecord> {
    rows.iter().filter_map(from_row).collect()
}

fn from_row(row: &RawRow) -> Option<DeviceRecord> {
    let device_type = row.str_at(DEVICE)?;
    let impressions = row.u64_at(IMPRESSIONS);
    let clicks = row.u64_at(CLICKS);
    Some(DeviceRecord {
        device_type,
        impressions,
        clicks,
        ctr: super::ctr(clicks, impressions),
        spend: row.f64_at(SPEND),
    })
}
