use crate::core::ServerError;
use crate::store::TransitionPolicy;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SEED_SHIFTS | true | 启动时写入演示班次 |
/// | SHIFT_TRANSITIONS | permissive | 状态流转策略 (permissive / strict) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，存在时按天滚动写文件 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SHIFT_TRANSITIONS=strict cargo run -p shift-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 启动时是否写入演示数据
    pub seed_shifts: bool,
    /// 班次状态流转策略
    pub transition_policy: TransitionPolicy,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；`SHIFT_TRANSITIONS` 取值非法时返回错误
    pub fn from_env() -> Result<Self, ServerError> {
        let transition_policy = match std::env::var("SHIFT_TRANSITIONS") {
            Ok(raw) => raw
                .parse::<TransitionPolicy>()
                .map_err(ServerError::Config)?,
            Err(_) => TransitionPolicy::default(),
        };

        Ok(Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            seed_shifts: std::env::var("SEED_SHIFTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            transition_policy,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，不读取环境变量
    pub fn with_overrides(http_port: u16, seed_shifts: bool, policy: TransitionPolicy) -> Self {
        Self {
            http_port,
            seed_shifts,
            transition_policy: policy,
            ..Self::default()
        }
    }

    /// 监听地址 (host:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".into(),
            http_port: 3000,
            environment: "development".into(),
            seed_shifts: true,
            transition_policy: TransitionPolicy::Permissive,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.seed_shifts);
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.transition_policy, TransitionPolicy::Permissive);
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(0, false, TransitionPolicy::Strict);
        assert_eq!(config.http_port, 0);
        assert!(!config.seed_shifts);
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert_eq!(config.http_host, "0.0.0.0");
    }
}
