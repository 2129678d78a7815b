use profile_service::{Logger, ServerConfig};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::default();

    if let Err(e) = Logger::init(config.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("启动用户资料服务...");

    match profile_service::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
