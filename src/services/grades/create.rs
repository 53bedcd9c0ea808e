use tracing::{info, warn};

use super::GradeService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::grades::{requests::CreateGradeRequest, responses::GradeDto};
use crate::models::users::entities::UserRole;

pub async fn create_grade(service: &GradeService, grade_data: CreateGradeRequest) -> Result<GradeDto> {
    if !service.range.contains(grade_data.value) {
        warn!("Rejected grade value {}", grade_data.value);
        return Err(SchoolSystemError::invalid_value(format!(
            "Invalid grade value {}. Must be {}.",
            grade_data.value, service.range
        )));
    }

    if service
        .users
        .find_with_role(grade_data.student_id, UserRole::Student)
        .await?
        .is_none()
    {
        return Err(SchoolSystemError::student_not_found(format!(
            "Student with ID {} not found",
            grade_data.student_id
        )));
    }

    if service
        .courses
        .find_by_id(grade_data.course_id)
        .await?
        .is_none()
    {
        return Err(SchoolSystemError::course_not_found(format!(
            "Course with ID {} not found",
            grade_data.course_id
        )));
    }

    let grade = service.grades.create(grade_data).await?;
    info!(
        "Created grade {} for student {} in course {}",
        grade.id, grade.student_id, grade.course_id
    );

    Ok(GradeDto::from(grade))
}
