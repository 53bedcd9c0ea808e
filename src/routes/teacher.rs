//! 教师接口，当前教师 ID 取自 JWT

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::{StorageData, acting_user};
use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::enrollments::requests::AddStudentRequest;
use crate::models::grades::requests::{AssignGradeRequest, BulkGradeRequest};
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;

fn teacher_service(storage: &StorageData) -> TeacherService {
    TeacherService::new(storage.get_ref().clone())
}

pub async fn list_my_courses(req: HttpRequest, storage: StorageData) -> ActixResult<HttpResponse> {
    let teacher = acting_user(&req)?;
    let courses = teacher_service(&storage).list_my_courses(teacher.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "Courses retrieved successfully")))
}

pub async fn list_course_students(
    req: HttpRequest,
    storage: StorageData,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let teacher = acting_user(&req)?;
    let students = teacher_service(&storage)
        .list_students_in_course(teacher.id, course_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(students, "Students retrieved successfully")))
}

pub async fn add_course_student(
    req: HttpRequest,
    storage: StorageData,
    course_id: web::Path<i64>,
    student_data: web::Json<AddStudentRequest>,
) -> ActixResult<HttpResponse> {
    let teacher = acting_user(&req)?;
    let enrollment = teacher_service(&storage)
        .add_student_to_course(teacher.id, course_id.into_inner(), student_data.student_id)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        enrollment,
        "Student added to course successfully",
    )))
}

pub async fn remove_course_student(
    req: HttpRequest,
    storage: StorageData,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let teacher = acting_user(&req)?;
    let (course_id, student_id) = path.into_inner();
    teacher_service(&storage)
        .remove_student_from_course(teacher.id, course_id, student_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
        "Student removed from course successfully",
    )))
}

pub async fn list_course_grades(
    req: HttpRequest,
    storage: StorageData,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let teacher = acting_user(&req)?;
    let grades = teacher_service(&storage)
        .list_grades_for_course(teacher.id, course_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "Grades retrieved successfully")))
}

pub async fn assign_grade(
    req: HttpRequest,
    storage: StorageData,
    grade_data: web::Json<AssignGradeRequest>,
) -> ActixResult<HttpResponse> {
    let teacher = acting_user(&req)?;
    let grade = teacher_service(&storage)
        .assign_or_update_grade(teacher.id, grade_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade saved successfully")))
}

pub async fn bulk_assign_grades(
    req: HttpRequest,
    storage: StorageData,
    course_id: web::Path<i64>,
    bulk_data: web::Json<BulkGradeRequest>,
) -> ActixResult<HttpResponse> {
    let teacher = acting_user(&req)?;
    let result = teacher_service(&storage)
        .bulk_assign_grades(teacher.id, course_id.into_inner(), bulk_data.into_inner().entries)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Bulk grade import completed")))
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/courses", web::get().to(list_my_courses))
            .route("/courses/{id}/students", web::get().to(list_course_students))
            .route("/courses/{id}/students", web::post().to(add_course_student))
            .route(
                "/courses/{id}/students/{student_id}",
                web::delete().to(remove_course_student),
            )
            .route("/courses/{id}/grades", web::get().to(list_course_grades))
            .route("/courses/{id}/grades/bulk", web::post().to(bulk_assign_grades))
            .route("/grades", web::post().to(assign_grade)),
    );
}
