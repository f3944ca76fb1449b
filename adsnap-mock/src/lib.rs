//! adsnap-mock
//!
//! In-memory [`ReportTransport`] that simulates the platform's Report Center
//! lifecycle: model listing and creation, snapshot creation, pending-then-ready
//! polling, and row downloads. Behavior is scripted per report kind through
//! [`MockPlatform::builder`], and call counters are exposed so tests can
//! assert on remote traffic (e.g. "exactly one create across two resolves").
//!
//! All simulated latency goes through `tokio::time::sleep`, so tests running
//! under `start_paused` advance instantly.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use adsnap_core::{ReportError, ReportKind, ReportTransport};

/// Scripted behavior for one report kind.
#[derive(Debug, Clone, Default)]
struct KindScript {
    rows: Vec<Value>,
    delay: Duration,
    pending_polls: u32,
    fail_model_creation: bool,
    error_on_snapshot_create: bool,
    snapshot_without_id: bool,
    fail_snapshot: bool,
    never_complete: bool,
}

#[derive(Debug, Clone)]
struct ModelEntry {
    id: u64,
    template_id: u64,
    title: String,
}

#[derive(Debug, Clone)]
struct SnapshotEntry {
    report_id: u64,
    kind: ReportKind,
    polls: u32,
}

#[derive(Debug, Default)]
struct State {
    models: Vec<ModelEntry>,
    snapshots: HashMap<u64, SnapshotEntry>,
    next_model_id: u64,
    next_snapshot_id: u64,
    list_report_calls: u64,
    create_report_calls: u64,
    create_snapshot_calls: u64,
    poll_calls: u64,
    download_calls: u64,
}

/// Deterministic fake of the remote Report Center.
pub struct MockPlatform {
    scripts: HashMap<ReportKind, KindScript>,
    auth_failure: bool,
    state: Mutex<State>,
}

impl MockPlatform {
    /// Start scripting a platform.
    #[must_use]
    pub fn builder() -> MockPlatformBuilder {
        MockPlatformBuilder::new()
    }

    /// Number of report-model listing requests observed.
    pub fn list_report_calls(&self) -> u64 {
        self.state.lock().unwrap().list_report_calls
    }

    /// Number of report-model creation requests observed.
    pub fn create_report_calls(&self) -> u64 {
        self.state.lock().unwrap().create_report_calls
    }

    /// Number of snapshot creation requests observed.
    pub fn create_snapshot_calls(&self) -> u64 {
        self.state.lock().unwrap().create_snapshot_calls
    }

    /// Number of snapshot status polls observed.
    pub fn poll_calls(&self) -> u64 {
        self.state.lock().unwrap().poll_calls
    }

    /// Number of row downloads observed.
    pub fn download_calls(&self) -> u64 {
        self.state.lock().unwrap().download_calls
    }

    fn script(&self, kind: ReportKind) -> KindScript {
        self.scripts.get(&kind).cloned().unwrap_or_default()
    }

    fn kind_for_template(template_id: u64) -> Option<ReportKind> {
        ReportKind::ALL
            .iter()
            .copied()
            .find(|k| k.template_id() == template_id)
    }

    fn list_models(&self) -> Value {
        let mut state = self.state.lock().unwrap();
        state.list_report_calls += 1;
        let reports: Vec<Value> = state
            .models
            .iter()
            .map(|m| json!({"id": m.id, "template_id": m.template_id, "title": m.title}))
            .collect();
        json!({ "reports": reports })
    }

    fn create_model(&self, body: &Value) -> Result<Value, ReportError> {
        let template_id = body
            .get("template_id")
            .and_then(Value::as_u64)
            .ok_or_else(|| ReportError::invalid_arg("template_id missing"))?;
        let title = body
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("untitled")
            .to_string();

        let kind = Self::kind_for_template(template_id);
        {
            let mut state = self.state.lock().unwrap();
            state.create_report_calls += 1;
        }
        if kind.is_some_and(|k| self.script(k).fail_model_creation) {
            return Err(ReportError::remote(500, "template unavailable"));
        }

        let mut state = self.state.lock().unwrap();
        state.next_model_id += 1;
        let id = 1000 + state.next_model_id;
        state.models.push(ModelEntry {
            id,
            template_id,
            title: title.clone(),
        });
        Ok(json!({"id": id, "template_id": template_id, "title": title}))
    }

    async fn create_snapshot(&self, report_id: u64) -> Result<Value, ReportError> {
        let kind = {
            let mut state = self.state.lock().unwrap();
            state.create_snapshot_calls += 1;
            state
                .models
                .iter()
                .find(|m| m.id == report_id)
                .and_then(|m| Self::kind_for_template(m.template_id))
        };
        let Some(kind) = kind else {
            return Err(ReportError::not_found(format!("report {report_id}")));
        };

        let script = self.script(kind);
        if script.delay > Duration::ZERO {
            tokio::time::sleep(script.delay).await;
        }
        if script.error_on_snapshot_create {
            return Err(ReportError::remote(500, "snapshot scheduler unavailable"));
        }
        if script.snapshot_without_id {
            return Ok(json!({"status": "pending"}));
        }

        let mut state = self.state.lock().unwrap();
        state.next_snapshot_id += 1;
        let id = 9000 + state.next_snapshot_id;
        state.snapshots.insert(
            id,
            SnapshotEntry {
                report_id,
                kind,
                polls: 0,
            },
        );
        Ok(json!({"id": id, "status": "pending"}))
    }

    fn poll_snapshot(&self, org: &str, snapshot_id: u64) -> Result<Value, ReportError> {
        let mut state = self.state.lock().unwrap();
        state.poll_calls += 1;
        let entry = state
            .snapshots
            .get_mut(&snapshot_id)
            .ok_or_else(|| ReportError::not_found(format!("snapshot {snapshot_id}")))?;
        entry.polls += 1;
        let (kind, polls, report_id) = (entry.kind, entry.polls, entry.report_id);
        drop(state);

        let script = self.script(kind);
        if script.fail_snapshot {
            return Ok(json!({"id": snapshot_id, "status": "failed"}));
        }
        if script.never_complete || polls <= script.pending_polls {
            return Ok(json!({"id": snapshot_id, "status": "running"}));
        }
        Ok(json!({
            "id": snapshot_id,
            "status": "completed",
            "download_link": format!(
                "/organizations/{org}/report_center/reports/{report_id}/schedules/snapshots/{snapshot_id}/download"
            ),
        }))
    }

    fn download(&self, snapshot_id: u64) -> Result<Value, ReportError> {
        let kind = {
            let mut state = self.state.lock().unwrap();
            state.download_calls += 1;
            state.snapshots.get(&snapshot_id).map(|s| s.kind)
        };
        let Some(kind) = kind else {
            return Err(ReportError::not_found(format!("snapshot {snapshot_id}")));
        };
        Ok(json!({ "results": self.script(kind).rows }))
    }
}

fn segments(path: &str) -> (Vec<&str>, &str) {
    let (path, query) = path.split_once('?').unwrap_or((path, ""));
    (path.split('/').filter(|s| !s.is_empty()).collect(), query)
}

fn parse_id(seg: &str) -> Result<u64, ReportError> {
    seg.parse::<u64>()
        .map_err(|_| ReportError::invalid_arg(format!("bad id segment {seg:?}")))
}

#[async_trait]
impl ReportTransport for MockPlatform {
    async fn get(&self, path: &str) -> Result<Value, ReportError> {
        if self.auth_failure {
            return Err(ReportError::Auth);
        }
        let (segs, _query) = segments(path);
        match segs.as_slice() {
            // /organizations/{org}/report_center/reports
            ["organizations", _org, "report_center", "reports"] => Ok(self.list_models()),
            // .../reports/{rid}/schedules/snapshots/{sid}
            ["organizations", org, "report_center", "reports", _rid, "schedules", "snapshots", sid] => {
                self.poll_snapshot(org, parse_id(sid)?)
            }
            // .../snapshots/{sid}/download
            ["organizations", _org, "report_center", "reports", _rid, "schedules", "snapshots", sid, "download"] => {
                self.download(parse_id(sid)?)
            }
            _ => Err(ReportError::not_found(path.to_string())),
        }
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ReportError> {
        if self.auth_failure {
            return Err(ReportError::Auth);
        }
        let (segs, _query) = segments(path);
        match segs.as_slice() {
            ["organizations", _org, "report_center", "reports"] => self.create_model(body),
            ["organizations", _org, "report_center", "reports", rid, "schedules", "create_snapshot"] => {
                self.create_snapshot(parse_id(rid)?).await
            }
            _ => Err(ReportError::not_found(path.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "adsnap-mock"
    }
}

/// Builder scripting a [`MockPlatform`].
pub struct MockPlatformBuilder {
    scripts: HashMap<ReportKind, KindScript>,
    preseeded: Vec<(ReportKind, u64)>,
    auth_failure: bool,
}

impl Default for MockPlatformBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatformBuilder {
    /// Empty platform: every download yields zero rows, every snapshot
    /// completes on the first poll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            preseeded: Vec::new(),
            auth_failure: false,
        }
    }

    fn script(&mut self, kind: ReportKind) -> &mut KindScript {
        self.scripts.entry(kind).or_default()
    }

    /// Rows served when this kind's snapshot is downloaded.
    #[must_use]
    pub fn with_rows(mut self, kind: ReportKind, rows: Vec<Value>) -> Self {
        self.script(kind).rows = rows;
        self
    }

    /// Artificial latency applied while creating this kind's snapshot.
    #[must_use]
    pub fn with_delay(mut self, kind: ReportKind, delay: Duration) -> Self {
        self.script(kind).delay = delay;
        self
    }

    /// Number of status polls that report `running` before the download link
    /// appears (default 0: ready on the first poll).
    #[must_use]
    pub fn pending_polls(mut self, kind: ReportKind, polls: u32) -> Self {
        self.script(kind).pending_polls = polls;
        self
    }

    /// Model creation for this kind fails remotely (resolver sees an error
    /// and reports the kind as unavailable).
    #[must_use]
    pub fn fails_model_creation(mut self, kind: ReportKind) -> Self {
        self.script(kind).fail_model_creation = true;
        self
    }

    /// Snapshot creation for this kind errors at the transport level.
    #[must_use]
    pub fn errors_on_snapshot_create(mut self, kind: ReportKind) -> Self {
        self.script(kind).error_on_snapshot_create = true;
        self
    }

    /// Snapshot creation for this kind succeeds but returns no identifier.
    #[must_use]
    pub fn snapshot_without_id(mut self, kind: ReportKind) -> Self {
        self.script(kind).snapshot_without_id = true;
        self
    }

    /// This kind's snapshot reaches the `failed` status on the first poll.
    #[must_use]
    pub fn fails_snapshot(mut self, kind: ReportKind) -> Self {
        self.script(kind).fail_snapshot = true;
        self
    }

    /// This kind's snapshot never completes (polls report `running` forever).
    #[must_use]
    pub fn never_completes(mut self, kind: ReportKind) -> Self {
        self.script(kind).never_complete = true;
        self
    }

    /// Preseed an existing remote report model for this kind, as if it had
    /// been created in an earlier process lifetime.
    #[must_use]
    pub fn with_existing_model(mut self, kind: ReportKind, id: u64) -> Self {
        self.preseeded.push((kind, id));
        self
    }

    /// Every request is rejected with an authentication error.
    #[must_use]
    pub fn rejects_credentials(mut self) -> Self {
        self.auth_failure = true;
        self
    }

    /// Build the platform.
    #[must_use]
    pub fn build(self) -> Arc<MockPlatform> {
        let mut state = State::default();
        for (kind, id) in self.preseeded {
            state.models.push(ModelEntry {
                id,
                template_id: kind.template_id(),
                title: kind.title().to_string(),
            });
        }
        Arc::new(MockPlatform {
            scripts: self.scripts,
            auth_failure: self.auth_failure,
            state: Mutex::new(state),
        })
    }
}
