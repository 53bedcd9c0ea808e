//! 管理员的教师与学生管理接口

use actix_web::{HttpResponse, Result as ActixResult, web};

use super::StorageData;
use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::users::{
    entities::UserRole, requests::CreateUserRequest, responses::UserListResponse,
};
use crate::services::UserService;

fn user_service(storage: &StorageData) -> UserService {
    UserService::new(storage.get_ref().clone())
}

fn list_response(items: Vec<crate::models::users::responses::UserDto>) -> UserListResponse {
    UserListResponse {
        total: items.len(),
        items,
    }
}

pub async fn list_teachers(storage: StorageData) -> ActixResult<HttpResponse> {
    let teachers = user_service(&storage).list_teachers().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        list_response(teachers),
        "Teachers retrieved successfully",
    )))
}

pub async fn create_teacher(
    storage: StorageData,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    let teacher = user_service(&storage)
        .create_user(Some(UserRole::Teacher), user_data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(teacher, "Teacher created successfully")))
}

pub async fn delete_teacher(
    storage: StorageData,
    teacher_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    user_service(&storage)
        .delete_user(teacher_id.into_inner(), Some(UserRole::Teacher))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully")))
}

pub async fn list_students(storage: StorageData) -> ActixResult<HttpResponse> {
    let students = user_service(&storage).list_students().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        list_response(students),
        "Students retrieved successfully",
    )))
}

pub async fn create_student(
    storage: StorageData,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    let student = user_service(&storage)
        .create_user(Some(UserRole::Student), user_data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(student, "Student created successfully")))
}

pub async fn delete_student(
    storage: StorageData,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    user_service(&storage)
        .delete_user(student_id.into_inner(), Some(UserRole::Student))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/teachers", web::get().to(list_teachers))
            .route("/teachers", web::post().to(create_teacher))
            .route("/teachers/{id}", web::delete().to(delete_teacher))
            .route("/students", web::get().to(list_students))
            .route("/students", web::post().to(create_student))
            .route("/students/{id}", web::delete().to(delete_student)),
    );
}
