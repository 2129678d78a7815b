//! 基础设施层：配置、日志、网络监听

pub mod config;
pub mod logger;
pub mod server;
