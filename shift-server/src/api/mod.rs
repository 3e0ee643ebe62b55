//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`shifts`] - 班次市场接口

pub mod health;
pub mod shifts;

use axum::Router;
use http::HeaderName;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::middleware::{self, XRequestId};
use crate::utils::{AppError, ErrorCode};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(shifts::router())
        .merge(health::router())
        .fallback(fallback)
}

/// Wrap `router` with the HTTP middleware stack
pub fn with_middleware(router: Router<ServerState>) -> Router<ServerState> {
    router
        // Panic in a handler -> 500 {"error":"Internal server error"}
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        // CORS - web client is served from a different origin in development
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, set before logging and propagation see the request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    with_middleware(build_router()).with_state(state)
}

async fn fallback() -> AppError {
    AppError::new(ErrorCode::NotFound)
}
