//! Pure normalizers, one per report type.
//!
//! Each module maps raw platform rows into one of the typed record shapes in
//! [`crate::types`], coercing numeric fields and dropping rows whose
//! identifying dimension is absent. Field lookups go through ordered
//! candidate-key lists (see [`crate::raw::RawRow`]): the lists differ per
//! report type and per API era and intentionally stay spelled out in full.

/// Conversion totals aggregation.
pub mod conversions;
/// Device breakdown rows.
pub mod devices;
/// Domain performance rows.
pub mod domains;
/// Geo-fence performance rows.
pub mod geo_fence;
/// Keyword performance rows.
pub mod keywords;
/// Location performance rows.
pub mod location;
/// Viewability summary.
pub mod viewability;

/// Click-through rate in percent; 0 when there were no impressions.
pub(crate) fn ctr(clicks: u64, impressions: u64) -> f64 {
    if impressions == 0 {
        return 0.0;
    }
    clicks as f64 / impressions as f64 * 100.0
}

/// Spend reconstructed from delivery volume and eCPM.
///
/// The platform omits direct spend for location and keyword reports; the
/// documented substitute is `(impressions / 1000) * ecpm` and report values
/// downstream are reconciled against exactly this formula.
pub(crate) fn spend_from_ecpm(impressions: u64, ecpm: f64) -> f64 {
    impressions as f64 / 1000.0 * ecpm
}
