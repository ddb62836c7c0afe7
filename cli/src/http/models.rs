//! HTTP API数据模型

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracelab_core::api::StoreError;

// ============= Create Run =============

#[derive(Debug, Deserialize)]
pub struct CreateRunRequest {
    #[serde(default = "empty_object")]
    pub config: Value,
    #[serde(default = "empty_object")]
    pub task: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub run_id: String,
    pub created_at: f64,
    pub config: Value,
    pub task: Value,
}

// ============= Validate Trace =============

#[derive(Debug, Deserialize)]
pub struct ValidateTraceRequest {
    pub jsonl: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateTraceResponse {
    pub ok: bool,
    pub errors: Vec<String>,
}

// ============= Health =============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub timestamp: String,
}

// ============= Error Handling =============

#[derive(Debug)]
pub enum HttpServerError {
    InvalidRequest(String),
    RunNotFound(String),
    Timeout,
    Internal(String),
}

impl From<StoreError> for HttpServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(run_id) => Self::RunNotFound(run_id),
        }
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            Self::RunNotFound(run_id) => (
                StatusCode::NOT_FOUND,
                "RUN_NOT_FOUND",
                format!("run not found: {run_id}"),
            ),
            Self::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "TIMEOUT",
                "Request timeout".to_string(),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = serde_json::json!({
            "success": false,
            "error": message,
            "error_code": error_code,
        });

        (status, Json(body)).into_response()
    }
}
