//! Shift Server - 临时班次市场 HTTP 服务
//!
//! # 架构概述
//!
//! - **班次存储** (`store`): 进程内 `ShiftStore`，读写锁保护，重启后丢失
//! - **HTTP API** (`api`): 列表 / 发布 / 申请 / 确认
//! - **中间件** (`middleware`): 请求日志、请求 ID、panic 兜底
//!
//! # 模块结构
//!
//! ```text
//! shift-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── store/         # 班次存储和演示数据
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # HTTP 中间件
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use store::{ShiftStore, StoreError, TransitionPolicy};
pub use utils::{AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
   _____ __    _ ______
  / ___// /_  (_) __/ /_
  \__ \/ __ \/ / /_/ __/
 ___/ / / / / / __/ /_
/____/_/ /_/_/_/  \__/
    "#
    );
}

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 读取配置
/// 3. 初始化日志
pub fn setup_environment() -> core::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(config)
}
