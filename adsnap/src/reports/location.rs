use adsnap_core::normalize::location;
use adsnap_core::{DateRange, LocationRecord, ReportError, ReportKind};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Delivery performance by city/metro/region for one campaign.
    ///
    /// Spend is reconstructed from impressions and eCPM — the platform does
    /// not report location spend directly. Rows with no location dimension
    /// at all are dropped.
    ///
    /// # Errors
    /// Propagates transport failures, model `NotAvailable`, and snapshot
    /// failure/timeout.
    pub async fn location_performance(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<Vec<LocationRecord>, ReportError> {
        let rows = self
            .report_rows(org, ReportKind::Location, campaign_id, range)
            .await?;
        Ok(location::from_rows(&rows))
    }
}
