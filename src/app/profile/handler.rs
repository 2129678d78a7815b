//! Profile 处理器

use axum::{extract::State, response::Json};
use tracing::info;

use super::{model::UserProfile, service::ProfileService};

#[derive(Clone)]
pub struct AppState {
    pub profile_service: ProfileService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            profile_service: ProfileService::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /api/v1/user/profile
///
/// 请求体和查询参数一律忽略。
pub async fn get_user_profile(State(state): State<AppState>) -> Json<UserProfile> {
    info!("收到用户资料请求");
    Json(state.profile_service.current_profile())
}

