use crate::RawRow;
use crate::types::ViewabilitySummary;

const MEASURED: &[&str] = &[
    "summary_viewability.measured_impressions",
    "measured_impressions",
];
const VIEWABLE: &[&str] = &[
    "summary_viewability.viewable_impressions",
    "viewable_impressions",
];
const RATE: &[&str] = &["summary_viewability.viewability_rate", "viewability_rate"];

/// Build the viewability summary from the first row.
///
/// The platform returns exactly one row per query for this template; any
/// further rows are ignored. Returns `None` when the download held no rows.
/// When the platform omits the precomputed rate it is derived from the
/// measured and viewable counts.
#[must_use]
pub fn from_rows(rows: &[RawRow]) -> Option<ViewabilitySummary> {
    let row = rows.first()?;
    let measured_impressions = row.u64_at(MEASURED);
    let viewable_impressions = row.u64_at(VIEWABLE);
    let mut viewability_rate = row.f64_at(RATE);
    if viewability_rate == 0.0 && measured_impressions > 0 {
        viewability_rate = viewable_impressions as f64 / measured_impressions as f64 * 100.0;
    }
    Some(ViewabilitySummary {
        measured_impressions,
        viewable_impressions,
        viewability_rate,
    })
}
