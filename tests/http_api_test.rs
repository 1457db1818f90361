use httpmock::prelude::*;
use sheet_roster::core::{RosterOptions, RosterService};
use sheet_roster::server::{build_router, AppState};
use sheet_roster::{SheetsClient, TokenProvider};
use std::sync::Arc;
use std::time::Duration;

/// Starts the roster backend against the given mock Sheets server and
/// returns its base URL.
async fn spawn_backend(sheets: &MockServer) -> String {
    let store = SheetsClient::new(
        "sheet-1",
        TokenProvider::fixed("test-token"),
        Duration::from_secs(5),
    )
    .unwrap()
    .with_base_url(&sheets.base_url());

    let state = AppState {
        roster: Arc::new(RosterService::new(store, RosterOptions::default())),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn list_returns_five_slot_arrays() {
    let sheets = MockServer::start();
    sheets.mock(|when, then| {
        when.method(GET)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!A2:E");
        then.status(200).json_body(serde_json::json!({
            "values": [["Alice", "Bob"], ["Carol", ""]]
        }));
    });

    let base = spawn_backend(&sheets).await;
    let response = reqwest::get(format!("{base}/list")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!([["Alice", "Carol"], ["Bob"], [], [], []])
    );
}

#[tokio::test]
async fn list_maps_store_failure_to_generic_500() {
    let sheets = MockServer::start();
    sheets.mock(|when, then| {
        when.method(GET)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!A2:E");
        then.status(500)
            .json_body(serde_json::json!({ "error": { "message": "quota exceeded" } }));
    });

    let base = spawn_backend(&sheets).await;
    let response = reqwest::get(format!("{base}/list")).await.unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    // The store's own message never leaks to the caller.
    assert_eq!(body, serde_json::json!({ "error": "read failed" }));
}

#[tokio::test]
async fn add_appends_and_acknowledges() {
    let sheets = MockServer::start();
    let append_mock = sheets.mock(|when, then| {
        when.method(POST)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!B2:append")
            .query_param("valueInputOption", "RAW")
            .json_body(serde_json::json!({ "values": [["Dana"]] }));
        then.status(200).json_body(serde_json::json!({}));
    });

    let base = spawn_backend(&sheets).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/add"))
        .json(&serde_json::json!({ "columnIndex": 1, "name": "Dana" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "success" }));
    append_mock.assert();
}

#[tokio::test]
async fn add_rejects_out_of_range_column_without_store_call() {
    let sheets = MockServer::start();
    let any_call = sheets.mock(|when, then| {
        when.path_contains("/v4/");
        then.status(200).json_body(serde_json::json!({}));
    });

    let base = spawn_backend(&sheets).await;
    let client = reqwest::Client::new();

    for payload in [
        serde_json::json!({ "columnIndex": 5, "name": "X" }),
        serde_json::json!({ "columnIndex": -1, "name": "X" }),
        serde_json::json!({ "columnIndex": 0 }),
        serde_json::json!({ "columnIndex": 0, "name": "" }),
    ] {
        let response = client
            .post(format!("{base}/add"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "payload {payload} should be a 400");
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body.get("error").is_some());
    }

    any_call.assert_hits(0);
}

#[tokio::test]
async fn delete_tombstones_the_requested_cell() {
    let sheets = MockServer::start();
    let update_mock = sheets.mock(|when, then| {
        when.method(PUT)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!A3")
            .query_param("valueInputOption", "RAW")
            .json_body(serde_json::json!({ "values": [[""]] }));
        then.status(200).json_body(serde_json::json!({}));
    });

    let base = spawn_backend(&sheets).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/delete"))
        .json(&serde_json::json!({ "columnIndex": 0, "rowIndex": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    update_mock.assert();
}

#[tokio::test]
async fn delete_maps_store_failure_to_generic_500() {
    let sheets = MockServer::start();
    sheets.mock(|when, then| {
        when.method(PUT).path_contains("/values/");
        then.status(403).json_body(serde_json::json!({
            "error": { "message": "permission denied" }
        }));
    });

    let base = spawn_backend(&sheets).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/delete"))
        .json(&serde_json::json!({ "columnIndex": 0, "rowIndex": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "delete failed" }));
}

#[tokio::test]
async fn health_reports_ok() {
    let sheets = MockServer::start();
    let base = spawn_backend(&sheets).await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
