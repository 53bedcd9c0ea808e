use actix_web::{HttpResponse, Result as ActixResult, web};

use super::StorageData;
use crate::models::ApiResponse;
use crate::models::auth::requests::LoginRequest;
use crate::services::AuthService;

pub async fn login(
    storage: StorageData,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let response = AuthService::new(storage.get_ref().clone())
        .login(login_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/auth").route("/login", web::post().to(login)));
}
