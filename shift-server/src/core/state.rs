use std::time::Instant;

use chrono::Utc;

use crate::core::Config;
use crate::store::{ShiftStore, seed};

/// 服务器状态 - 持有所有共享组件
///
/// 由 HTTP 层持有并注入各处理器；Clone 只复制句柄，
/// 所有副本共享同一个班次存储。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | ShiftStore | 内存班次存储 |
/// | started_at | Instant | 启动时间 (用于 uptime) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 班次存储
    pub store: ShiftStore,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 使用已有存储创建状态 (测试常用)
    pub fn new(config: Config, store: ShiftStore) -> Self {
        Self {
            config,
            store,
            started_at: Instant::now(),
        }
    }

    /// 根据配置初始化状态
    ///
    /// `seed_shifts` 为 true 时写入演示班次
    pub fn initialize(config: &Config) -> Self {
        let policy = config.transition_policy;
        let store = if config.seed_shifts {
            ShiftStore::with_shifts(policy, seed::demo_shifts(Utc::now()))
        } else {
            ShiftStore::new(policy)
        };

        tracing::info!(
            shifts = store.len(),
            policy = %policy,
            "Shift store ready"
        );

        Self::new(config.clone(), store)
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
