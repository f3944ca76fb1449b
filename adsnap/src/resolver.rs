use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Value, json};
use tokio::sync::Mutex;

use adsnap_core::raw::extract_id;
use adsnap_core::{ReportError, ReportKind, ReportTransport};

/// Resolves `(organization, report kind)` pairs to remote report-model ids,
/// memoizing results for the process lifetime.
///
/// Resolution lists the organization's existing models before creating one,
/// so restarts re-resolve to the same remote model instead of piling up
/// duplicates. Two tasks resolving the same cold pair concurrently can still
/// both miss and create a duplicate remote model; the platform tolerates
/// that, so no per-key lock is taken.
pub(crate) struct ModelResolver {
    transport: Arc<dyn ReportTransport>,
    page_size: usize,
    cache: Mutex<HashMap<(String, ReportKind), u64>>,
}

impl ModelResolver {
    pub(crate) fn new(transport: Arc<dyn ReportTransport>, page_size: usize) -> Self {
        Self {
            transport,
            page_size,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Return the model id for this pair, creating the remote model under
    /// `title` if the organization has none for the kind's template.
    ///
    /// Creation failures (other than authentication) map to `NotAvailable`:
    /// an organization missing one template must not take its sibling report
    /// types down with it.
    pub(crate) async fn resolve(
        &self,
        org: &str,
        kind: ReportKind,
        title: &str,
    ) -> Result<u64, ReportError> {
        let key = (org.to_string(), kind);
        if let Some(id) = self.cache.lock().await.get(&key) {
            return Ok(*id);
        }

        let listing = self
            .transport
            .get(&format!(
                "/organizations/{org}/report_center/reports?size={}",
                self.page_size
            ))
            .await?;
        if let Some(id) = find_model(&listing, kind) {
            tracing::debug!(report = %kind, org, model = id, "reusing existing report model");
            self.cache.lock().await.insert(key, id);
            return Ok(id);
        }

        let created = self
            .transport
            .post(
                &format!("/organizations/{org}/report_center/reports"),
                &json!({"template_id": kind.template_id(), "title": title}),
            )
            .await;
        match created {
            Ok(resp) => match extract_id(&resp, &["id", "report"]) {
                Some(id) => {
                    tracing::debug!(report = %kind, org, model = id, "created report model");
                    self.cache.lock().await.insert(key, id);
                    Ok(id)
                }
                None => {
                    tracing::warn!(report = %kind, org, "model creation returned no id");
                    Err(ReportError::not_available(kind))
                }
            },
            Err(e) if e.is_auth() => Err(e),
            Err(e) => {
                tracing::warn!(report = %kind, org, error = %e, "model creation failed");
                Err(ReportError::not_available(kind))
            }
        }
    }
}

/// Search a model listing for an entry bound to this kind's template.
fn find_model(listing: &Value, kind: ReportKind) -> Option<u64> {
    const ENVELOPE_KEYS: &[&str] = &["reports", "results", "data"];

    let entries = match listing {
        Value::Array(items) => Some(items),
        Value::Object(map) => ENVELOPE_KEYS
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_array)),
        _ => None,
    }?;

    entries
        .iter()
        .find(|entry| template_of(entry) == Some(kind.template_id()))
        .and_then(|entry| extract_id(entry, &["id"]))
}

fn template_of(entry: &Value) -> Option<u64> {
    match entry.get("template_id") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse::<u64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn find_model_matches_template_and_tolerates_string_ids() {
        let listing = json!({"reports": [
            {"id": "77", "template_id": ReportKind::Domains.template_id(), "title": "Domains"},
            {"id": 78, "template_id": 9999, "title": "Other"}
        ]});
        assert_eq!(find_model(&listing, ReportKind::Domains), Some(77));
        assert_eq!(find_model(&listing, ReportKind::Keywords), None);
    }

    #[test]
    fn find_model_accepts_bare_arrays() {
        let listing = json!([{"id": 5, "template_id": ReportKind::Devices.template_id()}]);
        assert_eq!(find_model(&listing, ReportKind::Devices), Some(5));
    }
}
