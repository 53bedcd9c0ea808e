pub mod login;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::repositories::UserRepository;
use crate::storage::Storage;

pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            users: UserRepository::new(storage),
        }
    }

    // 登录验证
    pub async fn login(&self, login_request: LoginRequest) -> Result<LoginResponse> {
        login::handle_login(self, login_request).await
    }
}
