use adsnap_core::normalize::domains;
use adsnap_core::{DateRange, DomainRecord, ReportError, ReportKind};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Delivery performance by serving domain for one campaign, sorted by
    /// impressions, highest first.
    ///
    /// # Errors
    /// Propagates transport failures, model `NotAvailable`, and snapshot
    /// failure/timeout.
    pub async fn domain_performance(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<Vec<DomainRecord>, ReportError> {
        let rows = self
            .report_rows(org, ReportKind::Domains, campaign_id, range)
            .await?;
        Ok(domains::from_rows(&rows))
    }
}
