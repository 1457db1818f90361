use crate::domain::model::Roster;
use crate::server::error::ApiError;
use crate::server::AppState;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Body for `/add`. Fields are optional so a missing field yields a 400
/// validation message rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddRequest {
    column_index: Option<i64>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteRequest {
    column_index: Option<i64>,
    row_index: Option<i64>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
}

fn require_column(value: Option<i64>) -> Result<usize, ApiError> {
    let raw = value.ok_or_else(|| ApiError::bad_request("columnIndex is required"))?;
    usize::try_from(raw)
        .map_err(|_| ApiError::bad_request(format!("columnIndex must be between 0 and 4, got {raw}")))
}

fn require_row(value: Option<i64>) -> Result<u32, ApiError> {
    let raw = value.ok_or_else(|| ApiError::bad_request("rowIndex is required"))?;
    u32::try_from(raw)
        .map_err(|_| ApiError::bad_request(format!("rowIndex must be non-negative, got {raw}")))
}

async fn list(State(state): State<AppState>) -> Result<Json<Roster>, ApiError> {
    let roster = state
        .roster
        .list()
        .await
        .map_err(|e| ApiError::operation("read failed", e))?;
    Ok(Json(roster))
}

async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let column = require_column(req.column_index)?;
    let name = req
        .name
        .ok_or_else(|| ApiError::bad_request("name is required"))?;

    state
        .roster
        .add(column, &name)
        .await
        .map_err(|e| ApiError::operation("write failed", e))?;
    Ok(Json(StatusResponse { status: "success" }))
}

async fn delete(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let column = require_column(req.column_index)?;
    let row = require_row(req.row_index)?;

    state
        .roster
        .delete(column, row)
        .await
        .map_err(|e| ApiError::operation("delete failed", e))?;
    Ok(Json(StatusResponse { status: "success" }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list))
        .route("/add", post(add))
        .route("/delete", post(delete))
        .route("/health", get(health))
}
