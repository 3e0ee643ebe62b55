//! HTTP 中间件
//!
//! - [`logging_middleware`] - 请求日志
//! - [`XRequestId`] - 请求 ID 生成
//! - [`handle_panic`] - handler panic 转 500

mod logging;
mod panic;
mod request_id;

pub use logging::logging_middleware;
pub use panic::handle_panic;
pub use request_id::XRequestId;
