//! Profile 业务服务

use super::model::{UserProfile, DEMO_USER};

#[derive(Clone)]
pub struct ProfileService {
    profile: UserProfile,
}

impl ProfileService {
    pub fn new() -> Self {
        Self { profile: DEMO_USER }
    }

    /// 当前登录用户的资料。没有用户查找，始终返回同一条记录。
    pub fn current_profile(&self) -> UserProfile {
        self.profile
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}
