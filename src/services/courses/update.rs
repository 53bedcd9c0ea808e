use tracing::info;

use super::CourseService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::courses::{requests::UpdateCourseRequest, responses::CourseDto};
use crate::models::users::entities::UserRole;
use crate::utils::validate::validate_course_name;

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    mut update_data: UpdateCourseRequest,
) -> Result<CourseDto> {
    let not_found =
        || SchoolSystemError::course_not_found(format!("Course with ID {course_id} not found"));

    if service.courses.find_by_id(course_id).await?.is_none() {
        return Err(not_found());
    }

    if let Some(name) = &update_data.name {
        validate_course_name(name).map_err(SchoolSystemError::validation)?;
        update_data.name = Some(name.trim().to_string());
    }

    // 新的负责教师同样必须是教师
    if let Some(teacher_id) = update_data.teacher_id
        && service
            .users
            .find_with_role(teacher_id, UserRole::Teacher)
            .await?
            .is_none()
    {
        return Err(SchoolSystemError::teacher_not_found(format!(
            "Teacher with ID {teacher_id} not found"
        )));
    }

    let course = service
        .courses
        .update(course_id, update_data)
        .await?
        .ok_or_else(not_found)?;

    info!("Updated course {}", course_id);
    Ok(CourseDto::from(course))
}
