//! 监听与服务

use axum::Router;
use std::{future::Future, io};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use super::config::ServerConfig;
use crate::core::error::{Result, ServiceError};

/// 绑定监听端口，失败即为致命的启动错误
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: config.addr,
            source,
        })
}

/// 运行服务直到收到 Ctrl+C 或 SIGTERM
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("🚀 用户资料服务运行在 http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok::<_, io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<io::Result<()>>();

    first_signal(ctrl_c, terminate).await;
    info!("收到退出信号，停止服务");
}

/// 等待任一信号到达
///
/// 某个信号处理器安装失败只记录错误，继续等待另一个。
async fn first_signal<C, T>(ctrl_c: C, terminate: T)
where
    C: Future<Output = io::Result<()>>,
    T: Future<Output = io::Result<()>>,
{
    tokio::select! {
        _ = watch_signal("Ctrl+C", ctrl_c) => {},
        _ = watch_signal("SIGTERM", terminate) => {},
    }
}

async fn watch_signal<F>(name: &str, signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!("{}: {}", name, ServiceError::Signal(e));
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::{sync::oneshot, time::timeout};

    fn install_failed() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "no signal driver"))
    }

    #[tokio::test]
    async fn failed_ctrl_c_still_waits_for_sigterm() {
        let (tx, rx) = oneshot::channel::<()>();
        let terminate = async move {
            let _ = rx.await;
            Ok::<_, io::Error>(())
        };
        let waiting = first_signal(async { install_failed() }, terminate);
        tokio::pin!(waiting);

        assert!(timeout(Duration::from_millis(50), &mut waiting).await.is_err());

        tx.send(()).unwrap();
        assert!(timeout(Duration::from_secs(1), waiting).await.is_ok());
    }

    #[tokio::test]
    async fn failed_sigterm_still_waits_for_ctrl_c() {
        let waiting = first_signal(async { Ok::<_, io::Error>(()) }, async { install_failed() });
        assert!(timeout(Duration::from_secs(1), waiting).await.is_ok());
    }

    #[tokio::test]
    async fn both_failed_never_shuts_down() {
        let waiting = first_signal(async { install_failed() }, async { install_failed() });
        assert!(timeout(Duration::from_millis(50), waiting).await.is_err());
    }
}
