//! Shift API 模块 (班次市场)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/shifts | GET | 列表 (industry / city 过滤) |
//! | /api/shifts | POST | 发布班次 |
//! | /api/shifts/{id}/apply | POST | 申请 (open → pending) |
//! | /api/shifts/{id}/approve | POST | 确认 (pending → booked) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/shifts", get(handler::list).post(handler::create))
        .route("/api/shifts/", get(handler::list).post(handler::create))
        .route(
            "/api/shifts/{id}/apply",
            post(handler::apply).get(handler::action_get),
        )
        .route(
            "/api/shifts/{id}/approve",
            post(handler::approve).get(handler::action_get),
        )
}
