//! Profile 数据模型

use serde::Serialize;

/// 用户资料
///
/// 字段全部是编译期常量，进程内永不变化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub status: &'static str,
}

/// 演示用户
pub const DEMO_USER: UserProfile = UserProfile {
    id: "user-123",
    name: "DevOps User",
    email: "devops@example.com",
    status: "Logged In",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_user_serializes_to_four_string_fields() {
        let value = serde_json::to_value(DEMO_USER).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["id"], "user-123");
        assert_eq!(object["name"], "DevOps User");
        assert_eq!(object["email"], "devops@example.com");
        assert_eq!(object["status"], "Logged In");
    }
}
