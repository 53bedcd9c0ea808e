//! 学生成绩与课程查询，学生只能查看自己的数据

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::info;

use super::{StorageData, acting_user};
use crate::errors::{Result, SchoolSystemError};
use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::grades::responses::StudentAverageResponse;
use crate::models::users::entities::UserRole;
use crate::services::{EnrollmentService, GradeService};

fn ensure_can_read(req: &HttpRequest, student_id: i64) -> Result<()> {
    let current = acting_user(req)?;
    if current.role == UserRole::Student && current.id != student_id {
        info!(
            "Student {} attempted to read data of student {}",
            current.id, student_id
        );
        return Err(SchoolSystemError::not_authorized(
            "Students may only access their own records",
        ));
    }
    Ok(())
}

pub async fn list_student_grades(
    req: HttpRequest,
    storage: StorageData,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let student_id = student_id.into_inner();
    ensure_can_read(&req, student_id)?;

    let grades = GradeService::new(storage.get_ref().clone())
        .course_grades_for_student(student_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "Grades retrieved successfully")))
}

pub async fn get_student_average(
    req: HttpRequest,
    storage: StorageData,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let student_id = student_id.into_inner();
    ensure_can_read(&req, student_id)?;

    let average = GradeService::new(storage.get_ref().clone())
        .average_for_student(student_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentAverageResponse {
            student_id,
            average,
        },
        "Average calculated successfully",
    )))
}

pub async fn list_student_courses(
    req: HttpRequest,
    storage: StorageData,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let student_id = student_id.into_inner();
    ensure_can_read(&req, student_id)?;

    let courses = EnrollmentService::new(storage.get_ref().clone())
        .list_student_courses(student_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "Courses retrieved successfully")))
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}/grades", web::get().to(list_student_grades))
            .route("/{id}/average", web::get().to(get_student_average))
            .route("/{id}/courses", web::get().to(list_student_courses)),
    );
}
