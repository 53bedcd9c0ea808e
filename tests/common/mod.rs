#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use rust_schoolsys::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use rust_schoolsys::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use rust_schoolsys::utils::password::hash_password;

pub const TEST_PASSWORD: &str = "testpass123";

/// 带完整迁移的内存 SQLite 存储
pub async fn sqlite_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::connect("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory sqlite storage");
    Arc::new(storage)
}

/// 直接写入存储的测试用户，密码为 `TEST_PASSWORD`
pub async fn create_test_user(storage: &Arc<dyn Storage>, username: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: username.to_string(),
            password: hash_password(TEST_PASSWORD).unwrap(),
            role,
        })
        .await
        .unwrap()
}

/// 挂载全部路由的测试应用
macro_rules! test_app {
    ($storage:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($storage.clone()))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_schoolsys::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::PathConfig::default()
                        .error_handler(rust_schoolsys::utils::path_error_handler),
                )
                .configure(rust_schoolsys::routes::configure_routes),
        )
        .await
    };
}

/// 登录并返回 access token
macro_rules! login {
    ($app:expr, $username:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "username": $username,
                "password": crate::common::TEST_PASSWORD,
            }))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
        body["data"]["access_token"]
            .as_str()
            .expect("access token in login response")
            .to_string()
    }};
}
