use super::entities::UserRole;
use serde::Deserialize;

// 用户创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: UserRole,
}

// 用户更新请求，空字符串视为未提供
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

// 用户列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListParams {
    pub role: Option<UserRole>,
}
