use crate::utils::error::RosterError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// HTTP-facing error. Validation problems keep their message; store and
/// transport failures collapse to one generic message per operation, with
/// the cause logged server-side only.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn operation(op: &'static str, err: RosterError) -> Self {
        if err.is_validation() {
            return ApiError::bad_request(err.to_string());
        }
        tracing::error!("{op}: {err}");
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: op.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
