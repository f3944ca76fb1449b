use crate::RawRow;
use crate::types::DomainRecord;

const DOMAIN: &[&str] = &[
    "dim_domain.domain_name",
    "summary_delivery_events.domain",
    "domain",
];
const IMPRESSIONS: &[&str] = &["summary_delivery_events.impressions", "impressions"];
const CLICKS: &[&str] = &["summary_delivery_events.clicks", "clicks"];
const SPEND: &[&str] = &[
    "summary_delivery_events.total_spend",
    "summary_delivery_events.spend",
    "total_spend",
];

/// Normalize domain rows, dropping rows without a domain and returning the
/// result sorted by impressions, highest first.
#[must_use]
pub fn from_rows(rows: &[RawRow]) -> Vec<DomainRecord> {
    let mut records: Vec<DomainRecord> = rows.iter().filter_map(from_row).collect();
    records.sort_by(|a, b| b.impressions.cmp(&a.impressions));
    records
}

fn from_row(row: &RawRow) -> Option<DomainRecord> {
    let domain = row.str_at(DOMAIN)?;
    let impressions = row.u64_at(IMPRESSIONS);
    let clicks = row.u64_at(CLICKS);
    Some(DomainRecord {
        domain,
        impressions,
        clicks,
        ctr: super::ctr(clicks, impressions),
        spend: row.f64_at(SPEND),
    })
}
