//! # 用户资料服务
//!
//! 只读 HTTP 服务，在 `GET /api/v1/user/profile` 返回固定的用户资料 JSON，
//! 并对所有路由开放跨域访问。
//!
//! 分层结构：
//! - `app`: 资料模型、服务和处理器，以及路由装配
//! - `core`: 错误类型与中间件
//! - `infrastructure`: 配置、日志、网络监听

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::{router, PROFILE_PATH};
pub use crate::core::error::{Result, ServiceError};
pub use crate::infrastructure::{config::ServerConfig, logger::Logger};

/// 绑定监听地址并运行服务，直到收到退出信号
pub async fn run(config: ServerConfig) -> Result<()> {
    let listener = infrastructure::server::bind(&config).await?;
    infrastructure::server::serve(listener, router()).await
}
