use adsnap_core::{CampaignReport, DateRange, ReportError, ReportKind, ReportOptions};

use crate::center::ReportCenter;
use crate::reports::validate_scope;

impl ReportCenter {
    /// Fetch the enabled report types for one campaign concurrently and
    /// assemble a composite result robust to partial failure.
    ///
    /// Behavior and trade-offs:
    /// - Every enabled kind runs its full pipeline (model resolution,
    ///   snapshot, normalization) in parallel; the call returns when the
    ///   slowest one finishes, so its effective bound is the configured
    ///   `max_wait`, not a sum across kinds.
    /// - A failed kind yields a `None` slot and an entry in
    ///   [`CampaignReport::warnings`]; it never cancels or fails its
    ///   siblings. A dashboard with five of six sections beats an error
    ///   page.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the organization or campaign id is empty,
    /// and `Auth` when the platform rejects the credentials — the only
    /// per-type failure that invalidates the whole request.
    pub async fn enhanced_campaign_data(
        &self,
        org: &str,
        campaign_id: &str,
        range: DateRange,
        options: ReportOptions,
    ) -> Result<CampaignReport, ReportError> {
        // Fail loudly on a meaningless scope instead of settling every slot
        // to None.
        validate_scope(org, campaign_id)?;

        let (geo_fences, locations, conversions, devices, viewability, domains) = tokio::join!(
            run_if(
                options.geo_fences,
                self.geo_fence_performance(org, campaign_id, range),
            ),
            run_if(
                options.locations,
                self.location_performance(org, campaign_id, range),
            ),
            run_if(
                options.conversions,
                self.conversion_data(org, campaign_id, range),
            ),
            run_if(
                options.devices,
                self.device_breakdown(org, campaign_id, range),
            ),
            run_if(
                options.viewability,
                self.viewability_metrics(org, campaign_id, range),
            ),
            run_if(
                options.domains,
                self.domain_performance(org, campaign_id, range),
            ),
        );

        let mut report = CampaignReport::default();
        report.geo_fences = settle(geo_fences, ReportKind::GeoFence, &mut report.warnings)?;
        report.locations = settle(locations, ReportKind::Location, &mut report.warnings)?;
        report.conversions = settle(conversions, ReportKind::Conversions, &mut report.warnings)?;
        report.devices = settle(devices, ReportKind::Devices, &mut report.warnings)?;
        report.viewability = settle(viewability, ReportKind::Viewability, &mut report.warnings)?;
        report.domains = settle(domains, ReportKind::Domains, &mut report.warnings)?;
        Ok(report)
    }
}

/// Run the pipeline only when its option flag is set.
async fn run_if<T, F>(enabled: bool, fut: F) -> Option<Result<T, ReportError>>
where
    F: Future<Output = Result<T, ReportError>>,
{
    if enabled { Some(fut.await) } else { None }
}

/// Settle one kind's outcome into its composite slot.
///
/// Failures demote to `None` plus a warning; authentication failures
/// re-raise because no sibling can succeed without credentials.
fn settle<T>(
    outcome: Option<Result<T, ReportError>>,
    kind: ReportKind,
    warnings: &mut Vec<String>,
) -> Result<Option<T>, ReportError> {
    match outcome {
        None => Ok(None),
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(e)) if e.is_auth() => Err(e),
        Some(Err(e)) => {
            tracing::warn!(report = %kind, error = %e, "report type failed; continuing without it");
            warnings.push(format!("{kind}: {e}"));
            Ok(None)
        }
    }
}
