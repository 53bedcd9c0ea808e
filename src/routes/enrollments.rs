use actix_web::{HttpResponse, Result as ActixResult, web};

use super::StorageData;
use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::users::entities::UserRole;
use crate::services::EnrollmentService;

fn enrollment_service(storage: &StorageData) -> EnrollmentService {
    EnrollmentService::new(storage.get_ref().clone())
}

pub async fn list_enrollments(storage: StorageData) -> ActixResult<HttpResponse> {
    let enrollments = enrollment_service(&storage).list_enrollments().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        enrollments,
        "Enrollments retrieved successfully",
    )))
}

pub async fn enroll_student(
    storage: StorageData,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    let EnrollRequest {
        student_id,
        course_id,
    } = enroll_data.into_inner();
    let enrollment = enrollment_service(&storage)
        .enroll(student_id, course_id)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        enrollment,
        "Student enrolled successfully",
    )))
}

pub async fn unenroll_student(
    storage: StorageData,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (student_id, course_id) = path.into_inner();
    enrollment_service(&storage)
        .unenroll(student_id, course_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student unenrolled successfully")))
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_enrollments))
            .route("", web::post().to(enroll_student))
            .route(
                "/{student_id}/{course_id}",
                web::delete().to(unenroll_student),
            ),
    );
}
