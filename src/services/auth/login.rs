use tracing::{error, info};

use super::AuthService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::models::users::responses::UserDto;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn handle_login(service: &AuthService, login_request: LoginRequest) -> Result<LoginResponse> {
    // 用户不存在与密码错误返回同一错误
    let user = service
        .users
        .find_by_username(login_request.username.trim())
        .await?
        .filter(|user| verify_password(&login_request.password, &user.password_hash))
        .ok_or_else(|| {
            info!("Login rejected for username {}", login_request.username);
            SchoolSystemError::authentication(INVALID_CREDENTIALS)
        })?;

    let access_token = JwtUtils::generate_access_token(user.id, &user.role.to_string())
        .map_err(|e| {
            error!("Failed to generate JWT token: {}", e);
            SchoolSystemError::serialization(format!("Unable to generate token: {e}"))
        })?;

    info!("User {} logged in successfully", user.username);

    Ok(LoginResponse {
        access_token,
        expires_in: JwtUtils::access_token_expiry_secs(),
        user: UserDto::from(user),
    })
}
