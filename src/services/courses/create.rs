use tracing::{info, warn};

use super::CourseService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::courses::{requests::CreateCourseRequest, responses::CourseDto};
use crate::models::users::entities::UserRole;
use crate::utils::validate::validate_course_name;

pub async fn create_course(
    service: &CourseService,
    mut course_data: CreateCourseRequest,
) -> Result<CourseDto> {
    validate_course_name(&course_data.name).map_err(SchoolSystemError::validation)?;

    // 负责教师必须存在且角色为教师
    if service
        .users
        .find_with_role(course_data.teacher_id, UserRole::Teacher)
        .await?
        .is_none()
    {
        warn!(
            "Course creation rejected: {} is not a teacher",
            course_data.teacher_id
        );
        return Err(SchoolSystemError::teacher_not_found(format!(
            "Teacher with ID {} not found",
            course_data.teacher_id
        )));
    }

    course_data.name = course_data.name.trim().to_string();
    let course = service.courses.create(course_data).await?;
    info!("Created course '{}' with ID {}", course.name, course.id);

    Ok(CourseDto::from(course))
}
