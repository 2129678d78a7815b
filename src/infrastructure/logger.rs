//! 日志基础设施

use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

use crate::core::error::{Result, ServiceError};

pub struct Logger;

impl Logger {
    /// 初始化全局 subscriber，`RUST_LOG` 优先于 `level`。
    ///
    /// 重复初始化返回错误而不是 panic。
    pub fn init(level: Level) -> Result<()> {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| ServiceError::Logger(e.to_string()))
    }
}
