use crate::RawRow;
use crate::types::KeywordRecord;

// The keyword dimension has moved twice across platform API versions; all
// three spellings are still observed in the wild.
const KEYWORD: &[&str] = &[
    "summary_delivery_events.keyword_reporting_name",
    "dim_keyword.keyword",
    "summary_delivery_events.keyword",
];
const IMPRESSIONS: &[&str] = &["summary_delivery_events.impressions", "impressions"];
const CLICKS: &[&str] = &["summary_delivery_events.clicks", "clicks"];
const ECPM: &[&str] = &["summary_delivery_events.ecpm", "ecpm"];

/// Normalize keyword rows, dropping rows without keyword text.
///
/// Spend is reconstructed from impressions and eCPM; this template does not
/// report spend directly.
#[must_use]
pub fn from_rows(rows: &[RawRow]) -> Vec<KeywordRecord> {
    rows.iter().filter_map(from_row).collect()
}

fn from_row(row: &RawRow) -> Option<KeywordRecord> {
    let keyword = row.str_at(KEYWORD)?;
    let impressions = row.u64_at(IMPRESSIONS);
    let clicks = row.u64_at(CLICKS);
    Some(KeywordRecord {
        keyword,
        impressions,
        clicks,
        ctr: super::ctr(clicks, impressions),
        spend: super::spend_from_ecpm(impressions, row.f64_at(ECPM)),
    })
}
