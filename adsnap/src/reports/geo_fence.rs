use adsnap_core::normalize::geo_fence;
use adsnap_core::{DateRange, GeoFenceRecord, ReportError, ReportKind};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Geo-fence delivery performance for one campaign and date range.
    ///
    /// Rows without a fence identifier are dropped.
    ///
    /// # Errors
    /// Propagates transport failures, `NotAvailable` when the organization
    /// has no geo-fence template, and snapshot failure/timeout.
    pub async fn geo_fence_performance(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<Vec<GeoFenceRecord>, ReportError> {
        let rows = self
            .report_rows(org, ReportKind::GeoFence, campaign_id, range)
            .await?;
        Ok(geo_fence::from_rows(&rows))
    }
}
