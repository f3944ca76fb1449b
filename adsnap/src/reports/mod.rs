mod composite;
mod conversions;
mod devices;
mod domains;
mod geo_fence;
mod keywords;
mod location;
mod viewability;

use adsnap_core::raw::RawRow;
use adsnap_core::{DateRange, ReportError, ReportKind, SnapshotFilters};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Shared pipeline for every report kind: validate the scope, resolve
    /// the report model, run the snapshot, and hand back raw rows for the
    /// kind's normalizer.
    pub(crate) async fn report_rows(
        &self,
        org: &str,
        kind: ReportKind,
        campaign_id: &str,
        range: DateRange,
    ) -> Result<Vec<RawRow>, ReportError> {
        validate_scope(org, campaign_id)?;
        let report_id = self.resolver.resolve(org, kind, kind.title()).await?;
        let filters = SnapshotFilters::for_campaign(campaign_id, range);
        self.run_snapshot(org, report_id, kind, &filters).await
    }
}

/// Reject requests whose scope can never resolve remotely.
pub(crate) fn validate_scope(org: &str, campaign_id: &str) -> Result<(), ReportError> {
    if org.trim().is_empty() {
        return Err(ReportError::invalid_arg(
            "organization id must not be empty",
        ));
    }
    if campaign_id.trim().is_empty() {
        return Err(ReportError::invalid_arg("campaign id must not be empty"));
    }
    Ok(())
}
