use actix_web::{HttpResponse, Result as ActixResult, guard, web};

use super::StorageData;
use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::courses::{
    requests::{CreateCourseRequest, UpdateCourseRequest},
    responses::CourseListResponse,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;

fn course_service(storage: &StorageData) -> CourseService {
    CourseService::new(storage.get_ref().clone())
}

pub async fn list_courses(storage: StorageData) -> ActixResult<HttpResponse> {
    let items = course_service(&storage).list_courses().await?;
    let response = CourseListResponse {
        total: items.len(),
        items,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Courses retrieved successfully")))
}

pub async fn get_course(
    storage: StorageData,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let course = course_service(&storage)
        .get_course(course_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course retrieved successfully")))
}

pub async fn create_course(
    storage: StorageData,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    let course = course_service(&storage)
        .create_course(course_data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course created successfully")))
}

pub async fn update_course(
    storage: StorageData,
    course_id: web::Path<i64>,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    let course = course_service(&storage)
        .update_course(course_id.into_inner(), update_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course updated successfully")))
}

pub async fn delete_course(
    storage: StorageData,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    course_service(&storage)
        .delete_course(course_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted successfully")))
}

// 配置路由：查询对所有登录用户开放，写操作仅限管理员
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .route("", web::get().to(list_courses))
                    .route("/{id}", web::get().to(get_course)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_course))
                    .route("/{id}", web::put().to(update_course))
                    .route("/{id}", web::delete().to(delete_course)),
            ),
    );
}
