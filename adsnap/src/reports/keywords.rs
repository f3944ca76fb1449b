use adsnap_core::normalize::keywords;
use adsnap_core::{DateRange, KeywordRecord, ReportError, ReportKind};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Delivery performance by matched keyword for one campaign.
    ///
    /// Standalone only — keyword data is not part of the composite campaign
    /// report. Spend is reconstructed from impressions and eCPM; this
    /// template does not report spend directly.
    ///
    /// # Errors
    /// Propagates transport failures, model `NotAvailable`, and snapshot
    /// failure/timeout.
    pub async fn keyword_performance(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<Vec<KeywordRecord>, ReportError> {
        let rows = self
            .report_rows(org, ReportKind::Keywords, campaign_id, range)
            .await?;
        Ok(keywords::from_rows(&rows))
    }
}
