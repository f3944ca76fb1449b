use adsnap_core::normalize::conversions;
use adsnap_core::{ConversionSummary, DateRange, ReportError, ReportKind};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Campaign-wide conversion totals, summed across all raw rows.
    ///
    /// # Errors
    /// Propagates transport failures, model `NotAvailable`, and snapshot
    /// failure/timeout.
    pub async fn conversion_data(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<ConversionSummary, ReportError> {
        let rows = self
            .report_rows(org, ReportKind::Conversions, campaign_id, range)
            .await?;
        Ok(conversions::summarize(&rows))
    }
}
