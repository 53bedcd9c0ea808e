use super::{TeacherService, ownership::ensure_owned};
use crate::errors::{Result, SchoolSystemError};
use crate::models::courses::responses::CourseDto;
use crate::models::grades::responses::GradeDto;
use crate::models::users::entities::UserRole;

pub async fn list_my_courses(service: &TeacherService, teacher_id: i64) -> Result<Vec<CourseDto>> {
    if service
        .users
        .find_with_role(teacher_id, UserRole::Teacher)
        .await?
        .is_none()
    {
        return Err(SchoolSystemError::teacher_not_found(format!(
            "Teacher with ID {teacher_id} not found"
        )));
    }

    let courses = service.courses.find_by_teacher(teacher_id).await?;
    Ok(courses.into_iter().map(CourseDto::from).collect())
}

pub async fn list_grades_for_course(
    service: &TeacherService,
    teacher_id: i64,
    course_id: i64,
) -> Result<Vec<GradeDto>> {
    ensure_owned(service, teacher_id, course_id).await?;

    let grades = service.grades.find_by_course(course_id).await?;
    Ok(grades.into_iter().map(GradeDto::from).collect())
}
