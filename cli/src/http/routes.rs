//! HTTP路由handlers

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use tracelab_core::api::{validate_trace_jsonl, RunEvent};

use crate::http::{
    models::*,
    state::AppState,
    validation::{validate_payload_object, validate_trace_size},
};

/// 创建所有路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/runs", post(create_run_handler))
        .route("/api/v1/runs/:run_id", get(get_run_handler))
        .route("/api/v1/runs/:run_id/events", get(list_events_handler))
        .route("/api/v1/runs/:run_id/replay", post(replay_handler))
        .route("/api/v1/traces/validate", post(validate_trace_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/shutdown", post(shutdown_handler))
        .with_state(state)
}

/// POST /api/v1/runs - 创建run并模拟事件
async fn create_run_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateRunRequest>,
) -> Result<Json<RunResponse>, HttpServerError> {
    // 更新统计
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/api/v1/runs");
    }

    // 验证payload
    validate_payload_object("config", &req.config)?;
    validate_payload_object("task", &req.task)?;

    let run = state.store.create_run(req.config, req.task);
    state.store.simulate(&run.run_id).map_err(|e| {
        let mut stats = state.stats.write().unwrap();
        stats.increment_error();
        HttpServerError::from(e)
    })?;

    Ok(Json(RunResponse {
        run_id: run.run_id,
        created_at: run.created_at,
        config: run.config,
        task: run.task,
    }))
}

/// GET /api/v1/runs/:run_id - 查询run
async fn get_run_handler(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<RunResponse>, HttpServerError> {
    // 更新统计
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/api/v1/runs/:run_id");
    }

    let run = state.store.get_run(&run_id).map_err(|e| {
        let mut stats = state.stats.write().unwrap();
        stats.increment_error();
        HttpServerError::from(e)
    })?;

    Ok(Json(RunResponse {
        run_id: run.run_id,
        created_at: run.created_at,
        config: run.config,
        task: run.task,
    }))
}

/// GET /api/v1/runs/:run_id/events - 查询run事件序列
async fn list_events_handler(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<Vec<RunEvent>>, HttpServerError> {
    // 更新统计
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/api/v1/runs/:run_id/events");
    }

    let events = state.store.list_events(&run_id).map_err(|e| {
        let mut stats = state.stats.write().unwrap();
        stats.increment_error();
        HttpServerError::from(e)
    })?;

    Ok(Json(events))
}

/// POST /api/v1/runs/:run_id/replay - 重新模拟并返回新事件
async fn replay_handler(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<Vec<RunEvent>>, HttpServerError> {
    // 更新统计
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/api/v1/runs/:run_id/replay");
    }

    // 对模拟runner来说replay是确定性的重新模拟
    let events = state.store.simulate(&run_id).map_err(|e| {
        let mut stats = state.stats.write().unwrap();
        stats.increment_error();
        HttpServerError::from(e)
    })?;

    Ok(Json(events))
}

/// POST /api/v1/traces/validate - 验证JSONL trace
async fn validate_trace_handler(
    State(state): State<AppState>,
    Json(req): Json<ValidateTraceRequest>,
) -> Result<Json<ValidateTraceResponse>, HttpServerError> {
    // 更新统计
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/api/v1/traces/validate");
    }

    // 验证大小上限；格式问题由validator作为诊断返回，不算请求错误
    validate_trace_size(&req.jsonl)?;

    let report = validate_trace_jsonl(&req.jsonl);
    Ok(Json(ValidateTraceResponse {
        ok: report.ok,
        errors: report.errors,
    }))
}

/// GET /health - 健康检查
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.stats.read().unwrap();

    Json(HealthResponse {
        status: "healthy".into(),
        session_id: state.session_id.clone(),
        uptime_seconds: stats.uptime_seconds(),
        requests_handled: stats.requests_total,
        timestamp: Local::now().to_rfc3339(),
    })
}

/// POST /api/v1/shutdown - 触发优雅关闭
async fn shutdown_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    // 发送关闭信号
    let _ = state.shutdown_tx.send(());

    Json(serde_json::json!({
        "success": true,
        "message": "Shutdown signal sent"
    }))
}
