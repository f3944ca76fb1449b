use adsnap_core::normalize::viewability;
use adsnap_core::{DateRange, ReportError, ReportKind, ViewabilitySummary};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Viewability measurement summary for one campaign.
    ///
    /// The platform returns a single row for this template; an empty
    /// download means no measurement data exists for the range.
    ///
    /// # Errors
    /// Propagates transport failures, model `NotAvailable`, snapshot
    /// failure/timeout, and a `Data` error when the download held no rows.
    pub async fn viewability_metrics(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<ViewabilitySummary, ReportError> {
        let rows = self
            .report_rows(org, ReportKind::Viewability, campaign_id, range)
            .await?;
        viewability::from_rows(&rows)
            .ok_or_else(|| ReportError::Data("viewability snapshot returned no rows".to_string()))
    }
}
