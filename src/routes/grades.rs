use actix_web::{HttpResponse, Result as ActixResult, web};

use super::StorageData;
use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::grades::requests::{CreateGradeRequest, UpdateGradeRequest};
use crate::models::users::entities::UserRole;
use crate::services::GradeService;

fn grade_service(storage: &StorageData) -> GradeService {
    GradeService::new(storage.get_ref().clone())
}

pub async fn list_grades(storage: StorageData) -> ActixResult<HttpResponse> {
    let grades = grade_service(&storage).list_grades().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "Grades retrieved successfully")))
}

pub async fn create_grade(
    storage: StorageData,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    let grade = grade_service(&storage)
        .create_grade(grade_data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(grade, "Grade created successfully")))
}

pub async fn get_grade(storage: StorageData, grade_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    let grade = grade_service(&storage)
        .get_grade(grade_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade retrieved successfully")))
}

pub async fn update_grade(
    storage: StorageData,
    grade_id: web::Path<i64>,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    let grade = grade_service(&storage)
        .update_grade(grade_id.into_inner(), update_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade updated successfully")))
}

pub async fn delete_grade(
    storage: StorageData,
    grade_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    grade_service(&storage)
        .delete_grade(grade_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade deleted successfully")))
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_grades))
            .route("", web::post().to(create_grade))
            .route("/{id}", web::get().to(get_grade))
            .route("/{id}", web::put().to(update_grade))
            .route("/{id}", web::delete().to(delete_grade)),
    );
}
