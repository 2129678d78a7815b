//! 核心中间件模块

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// 跨域策略：任意来源、任意方法、任意请求头
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 访问日志中间件
///
/// 位于 CORS 层外侧，预检请求和 404/405 同样记录，级别统一为 INFO。
pub async fn access_log_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let preflight = method == Method::OPTIONS;

    let response = next.run(req).await;
    let status = response.status();
    let cors = response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN);

    info!(
        "{} {} - {} - {} - cors: {} - {}ms",
        method,
        path,
        status,
        request_kind(preflight, status),
        cors,
        start.elapsed().as_millis()
    );

    response
}

fn request_kind(preflight: bool, status: StatusCode) -> &'static str {
    if preflight {
        "预检"
    } else if status == StatusCode::NOT_FOUND || status == StatusCode::METHOD_NOT_ALLOWED {
        "未匹配"
    } else {
        "资料"
    }
}
