//! 服务配置
//!
//! 监听地址固定为 `0.0.0.0:3002`，没有环境变量或配置文件。

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::Level;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// `RUST_LOG` 未设置时的日志级别
    pub log_level: Level,
}

impl ServerConfig {
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            log_level: Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_all_interfaces_port_3002() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.to_string(), "0.0.0.0:3002");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn with_addr_overrides_listen_address() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let config = ServerConfig::default().with_addr(addr);
        assert_eq!(config.addr, addr);
    }
}
