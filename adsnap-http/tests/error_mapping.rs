use httpmock::prelude::*;
use serde_json::json;

use adsnap_core::{ReportError, ReportTransport};
use adsnap_http::HttpTransport;

fn transport_for(server: &MockServer) -> HttpTransport {
    HttpTransport::builder(server.base_url(), "app-key", "user-key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn credentials_are_attached_to_every_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/organizations/7/report_center/reports")
                .header("X-App-Key", "app-key")
                .header("X-User-Key", "user-key");
            then.status(200).json_body(json!({"reports": []}));
        })
        .await;

    let t = transport_for(&server);
    let v = t
        .get("/organizations/7/report_center/reports")
        .await
        .unwrap();
    assert_eq!(v, json!({"reports": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn status_401_maps_to_auth() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(401).body("{}");
        })
        .await;

    let t = transport_for(&server);
    let e = t.get("/organizations/7/whatever").await.unwrap_err();
    assert!(matches!(e, ReportError::Auth));
}

#[tokio::test]
async fn status_429_maps_to_rate_limited() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(429);
        })
        .await;

    let t = transport_for(&server);
    let e = t.get("/x").await.unwrap_err();
    assert!(matches!(e, ReportError::RateLimited));
}

#[tokio::test]
async fn status_404_maps_to_not_found_with_path() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(404);
        })
        .await;

    let t = transport_for(&server);
    let e = t.get("/organizations/7/missing").await.unwrap_err();
    match e {
        ReportError::NotFound { what } => assert_eq!(what, "/organizations/7/missing"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn other_statuses_carry_body_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(503)
                .json_body(json!({"error": "maintenance window"}));
        })
        .await;

    let t = transport_for(&server);
    let e = t.post("/x", &json!({})).await.unwrap_err();
    match e {
        ReportError::Remote { status, msg } => {
            assert_eq!(status, 503);
            assert_eq!(msg, "maintenance window");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/organizations/7/report_center/reports")
                .json_body(json!({"template_id": 147, "title": "Keyword Performance by Campaign"}));
            then.status(201).json_body(json!({"id": 5001}));
        })
        .await;

    let t = transport_for(&server);
    let v = t
        .post(
            "/organizations/7/report_center/reports",
            &json!({"template_id": 147, "title": "Keyword Performance by Campaign"}),
        )
        .await
        .unwrap();
    assert_eq!(v["id"], 5001);
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_maps_to_connectivity() {
    // Port 9 (discard) is closed on CI hosts; the connect fails fast.
    let t = HttpTransport::builder("http://127.0.0.1:9", "app-key", "user-key")
        .build()
        .unwrap();
    let e = t.get("/x").await.unwrap_err();
    assert!(matches!(e, ReportError::Connectivity(_)));
}

#[test]
fn empty_credentials_are_rejected() {
    let e = HttpTransport::builder("https://api.example.com", "", "user")
        .build()
        .unwrap_err();
    assert!(matches!(e, ReportError::InvalidArg(_)));
}
