use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::warn;

use super::{StorageData, acting_user};
use crate::errors::SchoolSystemError;
use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::users::{
    entities::UserRole,
    requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
    responses::UserListResponse,
};
use crate::services::UserService;

fn user_service(storage: &StorageData) -> UserService {
    UserService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_users(
    storage: StorageData,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    let items = user_service(&storage).list_users(query.into_inner().role).await?;
    let response = UserListResponse {
        total: items.len(),
        items,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Users retrieved successfully")))
}

pub async fn create_user(
    storage: StorageData,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    let user = user_service(&storage)
        .create_user(None, user_data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created successfully")))
}

pub async fn get_user(storage: StorageData, user_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    let user = user_service(&storage).get_user(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User retrieved successfully")))
}

pub async fn update_user(
    storage: StorageData,
    user_id: web::Path<i64>,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    let user = user_service(&storage)
        .update_user(user_id.into_inner(), update_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User updated successfully")))
}

pub async fn delete_user(
    req: HttpRequest,
    storage: StorageData,
    user_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let user_id = user_id.into_inner();
    let current = acting_user(&req)?;
    // 管理员不能删除自己
    if current.id == user_id {
        warn!("Admin {} attempted to delete their own account", current.id);
        return Err(SchoolSystemError::validation("Cannot delete the current user").into());
    }

    user_service(&storage).delete_user(user_id, None).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted successfully")))
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}
