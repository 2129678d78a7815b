//! 路由装配

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::profile::handler::{get_user_profile, AppState};
use crate::core::middleware::{access_log_middleware, cors_layer};

pub const PROFILE_PATH: &str = "/api/v1/user/profile";

/// 构建应用路由
///
/// 中间件通过 `Router::layer` 注册，对 404/405 兜底响应同样生效。
/// 后注册的在外层：访问日志最外，其次 HTTP trace，CORS 最内，
/// 所以 CORS 层直接应答的 OPTIONS 请求也会被记录。
pub fn router() -> Router {
    Router::new()
        .route(PROFILE_PATH, get(get_user_profile))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(access_log_middleware))
        .with_state(AppState::new())
}
