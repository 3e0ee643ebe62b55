//! Handler panic 处理
//!
//! panic 不会终止服务，客户端只会看到 `{"error":"Internal server error"}`

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::utils::AppError;

/// `CatchPanicLayer` 回调
///
/// 日志由 `AppError` 的 System 分类统一记录 (含 panic 信息)
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_message(err.as_ref());
    AppError::internal(format!("handler panicked: {detail}")).into_response()
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    }
}
