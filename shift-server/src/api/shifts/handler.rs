//! Shift API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{ApplyRequest, Shift, ShiftFilter};

/// GET /api/shifts - 获取班次列表 (industry / city 过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<ShiftFilter>,
) -> Json<Vec<Shift>> {
    tracing::debug!(industry = ?filter.industry, city = ?filter.city, "Listing shifts");
    Json(state.store.list(&filter))
}

/// POST /api/shifts - 发布班次
///
/// Body 原样保存 (字段不做校验)，id 与 status 由服务端决定
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Shift>)> {
    let fields = read_record(&headers, &body)?;
    let shift = state.store.create(fields);
    Ok((StatusCode::CREATED, Json(shift)))
}

/// POST /api/shifts/:id/apply - 申请班次
///
/// Body 可选: `{"workerId": "...", "workerName": "..."}`
/// 未知 id 优先返回 404，不解析 body
pub async fn apply(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<Shift>> {
    if !state.store.contains(&id) {
        return Err(AppError::shift_not_found());
    }
    let record = read_record(&headers, &body)?;
    let actor: ApplyRequest = serde_json::from_value(Value::Object(record))
        .map_err(|e| AppError::invalid_request(format!("Invalid apply payload: {e}")))?;
    let shift = state.store.apply(&id, actor)?;
    Ok(Json(shift))
}

/// POST /api/shifts/:id/approve - 确认班次
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Shift>> {
    let shift = state.store.approve(&id)?;
    Ok(Json(shift))
}

/// GET /api/shifts/:id/{apply,approve}
///
/// Read-only: unknown id → 404, known id → 405 (never mutates)
pub async fn action_get(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    if !state.store.contains(&id) {
        return AppError::shift_not_found().into_response();
    }
    let mut response = AppError::method_not_allowed().into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
    response
}

/// Read the request body as a JSON record
///
/// A body without a JSON content type, or a blank one, is an empty record.
/// Anything else must parse as a JSON object.
fn read_record(headers: &HeaderMap, body: &[u8]) -> AppResult<Map<String, Value>> {
    if !is_json_content(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(_) => Err(AppError::invalid_request(
            "Request body must be a JSON object",
        )),
        Err(e) => Err(AppError::invalid_request(format!("Invalid JSON body: {e}"))),
    }
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
