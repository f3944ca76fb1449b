mod helpers;

use std::time::Duration;

use adsnap::{ReportError, ReportKind};
use adsnap_mock::MockPlatform;
use helpers::{CAMPAIGN, ORG, center, center_with_timing, range};

#[tokio::test(start_paused = true)]
async fn never_completing_snapshot_times_out_within_bound() {
    let platform = MockPlatform::builder()
        .never_completes(ReportKind::Devices)
        .build();
    let center = center_with_timing(&platform, Duration::from_secs(2), Duration::from_secs(5));

    let started = tokio::time::Instant::now();
    let e = center
        .device_breakdown(ORG, CAMPAIGN, range())
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    match e {
        ReportError::SnapshotTimeout { report } => assert_eq!(report, ReportKind::Devices),
        other => panic!("unexpected: {other:?}"),
    }
    // The deadline cuts the loop at max_wait; one extra poll interval is the
    // worst case, never an unbounded hang.
    assert!(elapsed >= Duration::from_secs(5), "returned early: {elapsed:?}");
    assert!(elapsed <= Duration::from_secs(7), "overran: {elapsed:?}");
    // Two polls fit inside a 5s wait at a 2s cadence.
    assert_eq!(platform.poll_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn failed_snapshot_is_abandoned_without_retry() {
    let platform = MockPlatform::builder()
        .fails_snapshot(ReportKind::GeoFence)
        .build();
    let center = center(&platform);

    let e = center
        .geo_fence_performance(ORG, CAMPAIGN, range())
        .await
        .unwrap_err();
    assert!(matches!(
        e,
        ReportError::SnapshotFailed {
            report: ReportKind::GeoFence
        }
    ));
    // One creation, one poll observing the failure, nothing further.
    assert_eq!(platform.create_snapshot_calls(), 1);
    assert_eq!(platform.poll_calls(), 1);
    assert_eq!(platform.download_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn snapshot_without_id_is_a_failure() {
    let platform = MockPlatform::builder()
        .snapshot_without_id(ReportKind::Domains)
        .build();
    let center = center(&platform);

    let e = center
        .domain_performance(ORG, CAMPAIGN, range())
        .await
        .unwrap_err();
    assert!(matches!(
        e,
        ReportError::SnapshotFailed {
            report: ReportKind::Domains
        }
    ));
    assert_eq!(platform.poll_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn slow_snapshot_completes_within_deadline() {
    let platform = MockPlatform::builder()
        .pending_polls(ReportKind::Domains, 3)
        .with_rows(ReportKind::Domains, vec![helpers::domain_row("a.example", 10)])
        .build();
    let center = center(&platform);

    let records = center
        .domain_performance(ORG, CAMPAIGN, range())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    // Three pending polls plus the one that saw the link.
    assert_eq!(platform.poll_calls(), 4);
}
