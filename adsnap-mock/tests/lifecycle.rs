use serde_json::json;

use adsnap_core::raw::extract_id;
use adsnap_core::{ReportKind, ReportTransport};
use adsnap_mock::MockPlatform;

#[tokio::test]
async fn full_snapshot_lifecycle() {
    let platform = MockPlatform::builder()
        .with_rows(ReportKind::Domains, vec![json!({"domain": "a.example"})])
        .pending_polls(ReportKind::Domains, 1)
        .build();

    // Create a model for the domains template.
    let created = platform
        .post(
            "/organizations/55/report_center/reports",
            &json!({"template_id": ReportKind::Domains.template_id(), "title": "Domains"}),
        )
        .await
        .unwrap();
    let report_id = extract_id(&created, &["id"]).unwrap();

    // It is now listed.
    let listing = platform
        .get("/organizations/55/report_center/reports?size=100")
        .await
        .unwrap();
    assert_eq!(listing["reports"].as_array().unwrap().len(), 1);

    // Snapshot: pending on the first poll, ready on the second.
    let snap = platform
        .post(
            &format!("/organizations/55/report_center/reports/{report_id}/schedules/create_snapshot"),
            &json!({"scheduled_plan": {}, "destination_format": "json", "filters": {}}),
        )
        .await
        .unwrap();
    let snapshot_id = extract_id(&snap, &["id"]).unwrap();

    let poll_path = format!(
        "/organizations/55/report_center/reports/{report_id}/schedules/snapshots/{snapshot_id}"
    );
    let first = platform.get(&poll_path).await.unwrap();
    assert_eq!(first["status"], "running");
    let second = platform.get(&poll_path).await.unwrap();
    assert_eq!(second["status"], "completed");

    let link = second["download_link"].as_str().unwrap().to_string();
    let rows = platform.get(&link).await.unwrap();
    assert_eq!(rows["results"].as_array().unwrap().len(), 1);

    assert_eq!(platform.create_report_calls(), 1);
    assert_eq!(platform.poll_calls(), 2);
    assert_eq!(platform.download_calls(), 1);
}

#[tokio::test]
async fn rejected_credentials_fail_everything() {
    let platform = MockPlatform::builder().rejects_credentials().build();
    let e = platform
        .get("/organizations/1/report_center/reports")
        .await
        .unwrap_err();
    assert!(e.is_auth());
}
