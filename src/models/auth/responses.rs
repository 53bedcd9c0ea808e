use crate::models::users::responses::UserDto;
use serde::{Deserialize, Serialize};

// 登录响应
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// 过期时间（秒）
    pub expires_in: i64,
    pub user: UserDto,
}
