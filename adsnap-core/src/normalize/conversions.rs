use crate::RawRow;
use crate::types::ConversionSummary;

const TOTAL: &[&str] = &[
    "summary_delivery_events.conversions",
    "total_conversions",
    "conversions",
];
const VIEW: &[&str] = &[
    "summary_delivery_events.view_through_conversions",
    "view_through_conversions",
];
const CLICK: &[&str] = &[
    "summary_delivery_events.click_through_conversions",
    "click_through_conversions",
];

/// Aggregate all conversion rows into a single campaign-wide summary.
///
/// Unlike the other report types this one sums across every row rather than
/// emitting one record per row.
#[must_use]
pub fn summarize(rows: &[RawRow]) -> ConversionSummary {
    let mut summary = ConversionSummary::default();
    for row in rows {
        summary.total_conversions += row.u64_at(TOTAL);
        summary.view_conversions += row.u64_at(VIEW);
        summary.click_conversions += row.u64_at(CLICK);
    }
    summary
}
