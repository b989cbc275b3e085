#![cfg(feature = "http-server")]

mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use staffing_grid::http::{create_router, AppState};
use support::read_data_file;

fn app() -> (AppState, Router) {
    let state = AppState::new(1024 * 1024);
    (state.clone(), create_router(state))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(router, request).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn upload(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/schedule")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_before_and_after_load() {
    let (_, router) = app();

    let (status, body) = send_json(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["loaded"], false);

    let content = read_data_file("sample_schedule.csv");
    send_json(&router, upload(json!({"content": content, "file_name": "sample_schedule.csv"}))).await;

    let (_, body) = send_json(&router, get("/health")).await;
    assert_eq!(body["loaded"], true);
}

#[tokio::test]
async fn test_upload_returns_receipt() {
    let (_, router) = app();

    let (status, body) = send_json(
        &router,
        upload(json!({
            "content": "hour,total_agents,A,B\n0,5,3,2\n1,0,0,0",
            "file_name": "day.csv"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_name"], "day.csv");
    assert_eq!(body["format"], "csv");
    assert_eq!(body["slot_count"], 2);
    assert_eq!(body["revision"], 1);
    assert_eq!(
        body["stats"],
        json!({"maxAgents": 5, "avgAgents": 3, "numCustomers": 2, "peakHour": "00:00"})
    );
    assert_eq!(body["checksum"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_snapshot_reflects_upload() {
    let (_, router) = app();
    let content = read_data_file("sample_schedule.json");
    send_json(&router, upload(json!({"content": content, "format": "json"}))).await;

    let (status, body) = send_json(&router, get("/v1/schedule")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revision"], 1);
    assert_eq!(body["fields"]["totalAgents"], "7");
    assert_eq!(body["fields"]["peakHour"], "13:00");
    assert_eq!(body["fields"]["fileName"], "upload.json");
    assert_eq!(body["cells"].as_array().unwrap().len(), 24);
    assert_eq!(body["cells"][13]["band"], "high");
    assert_eq!(body["cells"][13]["customer_label"], "2 customers");
    assert!(body["detail"].is_null());
}

#[tokio::test]
async fn test_format_error_keeps_previous_schedule() {
    let (state, router) = app();
    send_json(
        &router,
        upload(json!({"content": "hour,total_agents\n0,4", "file_name": "good.csv"})),
    )
    .await;

    let (status, body) = send_json(
        &router,
        upload(json!({"content": "{\"hour\": 1}", "file_name": "bad.json"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "FORMAT_ERROR");
    assert_eq!(body["message"], "invalid top-level shape");

    let dashboard = state.dashboard.read();
    assert_eq!(dashboard.revision(), 1);
    assert_eq!(dashboard.current().unwrap().source_name, "good.csv");
}

#[tokio::test]
async fn test_missing_csv_data_is_format_error() {
    let (_, router) = app();
    let (status, body) = send_json(
        &router,
        upload(json!({"content": "hour,total_agents", "format": "csv"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "missing header or data");
}

#[tokio::test]
async fn test_unknown_extension_rejected() {
    let (state, router) = app();
    let (status, body) = send_json(
        &router,
        upload(json!({"content": "hour,total_agents\n0,1", "file_name": "day.xlsx"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "FORMAT_ERROR");
    assert!(!state.dashboard.read().is_loaded());
}

#[tokio::test]
async fn test_upload_without_format_or_name_is_bad_request() {
    let (state, router) = app();
    let (status, body) = send_json(&router, upload(json!({"content": "[]"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(!state.dashboard.read().is_loaded());
}

#[tokio::test]
async fn test_upload_dotfile_name_infers_format() {
    let (_, router) = app();
    let (status, body) = send_json(
        &router,
        upload(json!({"content": "hour,total_agents\n0,1", "file_name": ".csv"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["format"], "csv");
}

#[tokio::test]
async fn test_select_and_dismiss_slot() {
    let (_, router) = app();
    send_json(
        &router,
        upload(json!({"content": "hour,total_agents,A,B,C\n0,8,2,5,1\n1,0,0,0,0", "format": "csv"})),
    )
    .await;

    let (status, detail) = send_json(&router, get("/v1/schedule/slots/0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Hour 00:00 - Agent Breakdown");
    assert_eq!(detail["entries"][0], json!({"customer": "B", "agents": 5}));
    assert_eq!(detail["total_agents"], 8);

    let (_, snapshot) = send_json(&router, get("/v1/schedule")).await;
    assert_eq!(snapshot["detail"]["position"], 0);

    let (_, empty) = send_json(&router, get("/v1/schedule/slots/1")).await;
    assert_eq!(empty["placeholder"], "No agents scheduled");

    let dismiss = Request::builder()
        .method("DELETE")
        .uri("/v1/schedule/detail")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&router, dismiss).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, snapshot) = send_json(&router, get("/v1/schedule")).await;
    assert!(snapshot["detail"].is_null());
}

#[tokio::test]
async fn test_select_out_of_range() {
    let (_, router) = app();
    let (status, body) = send_json(&router, get("/v1/schedule/slots/0")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    send_json(&router, upload(json!({"content": "[{}]", "format": "json"}))).await;
    let (status, _) = send_json(&router, get("/v1/schedule/slots/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_export_formats() {
    let (_, router) = app();

    let (status, _) = send(&router, get("/v1/schedule/export")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send_json(
        &router,
        upload(json!({"content": "hour,total_agents,B,A\n9,5,2,3", "format": "csv"})),
    )
    .await;

    let (status, text) = send(&router, get("/v1/schedule/export")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(text).unwrap(), "09:00 total=5; B=2, A=3\n");

    let (_, csv) = send(&router, get("/v1/schedule/export?format=csv")).await;
    assert_eq!(
        String::from_utf8(csv).unwrap(),
        "hour,total_agents,A,B\n09:00,5,3,2\n"
    );

    let (_, json_body) = send_json(&router, get("/v1/schedule/export?format=json")).await;
    assert_eq!(json_body[0]["breakdown"], json!({"B": 2, "A": 3}));

    let (status, _) = send(&router, get("/v1/schedule/export?format=xml")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
