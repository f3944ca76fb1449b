use adsnap_core::normalize::devices;
use adsnap_core::{DateRange, DeviceRecord, ReportError, ReportKind};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Delivery performance by device type for one campaign.
    ///
    /// # Errors
    /// Propagates transport failures, model `NotAvailable`, and snapshot
    /// failure/timeout.
    pub async fn device_breakdown(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<Vec<DeviceRecord>, ReportError> {
        let rows = self
            .report_rows(org, ReportKind::Devices, campaign_id, range)
            .await?;
        Ok(devices::from_rows(&rows))
    }
}
