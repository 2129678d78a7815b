//! 核心错误处理模块
//!
//! 处理器本身不会失败，这里只有启动和运行期的进程级错误。

use std::{io, net::SocketAddr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("无法绑定到地址 {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("服务器运行失败: {0}")]
    Serve(#[source] io::Error),

    #[error("日志初始化失败: {0}")]
    Logger(String),

    #[error("无法安装信号处理器: {0}")]
    Signal(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
