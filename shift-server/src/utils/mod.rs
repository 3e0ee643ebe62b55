//! 工具模块
//!
//! - [`AppError`] / [`AppResult`] / [`ErrorCode`] - 应用错误类型 (from shared::error)
//! - [`logger`] - 日志初始化

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorCode};
