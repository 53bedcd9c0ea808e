use tracing::{info, warn};

use super::EnrollmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::enrollments::responses::EnrollmentDto;
use crate::models::users::entities::UserRole;

pub async fn enroll(
    service: &EnrollmentService,
    student_id: i64,
    course_id: i64,
) -> Result<EnrollmentDto> {
    if service
        .users
        .find_with_role(student_id, UserRole::Student)
        .await?
        .is_none()
    {
        return Err(SchoolSystemError::student_not_found(format!(
            "Student with ID {student_id} not found"
        )));
    }

    if service.courses.find_by_id(course_id).await?.is_none() {
        return Err(SchoolSystemError::course_not_found(format!(
            "Course with ID {course_id} not found"
        )));
    }

    // 每个 (学生, 课程) 至多一条选课记录
    if service.enrollments.exists(student_id, course_id).await? {
        warn!(
            "Student {} is already enrolled in course {}",
            student_id, course_id
        );
        return Err(SchoolSystemError::already_enrolled(format!(
            "Student with ID {student_id} is already enrolled in course {course_id}"
        )));
    }

    let enrollment = service.enrollments.create(student_id, course_id).await?;
    info!("Enrolled student {} in course {}", student_id, course_id);

    Ok(EnrollmentDto::from(enrollment))
}
