use serde_json::{Value, json};

use adsnap_core::raw::{RawRow, extract_id, parse_rows};
use adsnap_core::{ReportError, ReportKind, SnapshotFilters};

use crate::center::ReportCenter;

impl ReportCenter {
    /// Execute one snapshot end to end: trigger the computation, poll at a
    /// fixed interval until a download link appears, then fetch the rows.
    ///
    /// The poll-and-download phase runs under `tokio::time::timeout` with the
    /// configured `max_wait`; on expiry the snapshot is abandoned and a
    /// `SnapshotTimeout` is returned. A snapshot that reports `failed` is
    /// likewise abandoned — retries mean a fresh snapshot, never re-polling.
    pub(crate) async fn run_snapshot(
        &self,
        org: &str,
        report_id: u64,
        kind: ReportKind,
        filters: &SnapshotFilters,
    ) -> Result<Vec<RawRow>, ReportError> {
        let body = json!({
            "scheduled_plan": {},
            "destination_format": "json",
            "filters": filters.to_value(),
        });
        let created = self
            .transport
            .post(
                &format!("/organizations/{org}/report_center/reports/{report_id}/schedules/create_snapshot"),
                &body,
            )
            .await?;
        let Some(snapshot_id) = extract_id(&created, &["id", "snapshot"]) else {
            tracing::warn!(report = %kind, org, "snapshot creation returned no id");
            return Err(ReportError::snapshot_failed(kind));
        };

        let poll_path = format!(
            "/organizations/{org}/report_center/reports/{report_id}/schedules/snapshots/{snapshot_id}"
        );
        let max_wait = self.max_wait;
        (tokio::time::timeout(max_wait, self.poll_until_downloaded(&poll_path, kind)).await)
            .unwrap_or_else(|_| {
                tracing::warn!(report = %kind, snapshot = snapshot_id, waited = ?max_wait, "snapshot timed out");
                Err(ReportError::snapshot_timeout(kind))
            })
    }

    async fn poll_until_downloaded(
        &self,
        poll_path: &str,
        kind: ReportKind,
    ) -> Result<Vec<RawRow>, ReportError> {
        loop {
            tokio::time::sleep(self.poll_interval).await;
            let status = self.transport.get(poll_path).await?;

            if let Some(link) = download_link(&status) {
                tracing::debug!(report = %kind, link, "snapshot ready, downloading");
                let payload = self.transport.get(&link).await?;
                return Ok(parse_rows(&payload));
            }
            if is_failed(&status) {
                tracing::warn!(report = %kind, "snapshot reported failure");
                return Err(ReportError::snapshot_failed(kind));
            }
            // Pending and running are indistinguishable for our purposes.
            tracing::debug!(report = %kind, "snapshot still computing");
        }
    }
}

/// The download link, once the snapshot has completed. Some API versions
/// nest the snapshot resource under a wrapper object.
fn download_link(status: &Value) -> Option<String> {
    let direct = status.get("download_link").and_then(Value::as_str);
    let nested = status
        .get("snapshot")
        .and_then(|s| s.get("download_link"))
        .and_then(Value::as_str);
    direct
        .or(nested)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}

fn is_failed(status: &Value) -> bool {
    let state = status
        .get("status")
        .or_else(|| status.get("snapshot").and_then(|s| s.get("status")))
        .and_then(Value::as_str);
    matches!(state, Some("failed" | "error"))
}
