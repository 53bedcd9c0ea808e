use super::EnrollmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::courses::responses::CourseDto;
use crate::models::enrollments::responses::EnrollmentDetails;
use crate::models::users::entities::UserRole;

pub async fn list_enrollments(service: &EnrollmentService) -> Result<Vec<EnrollmentDetails>> {
    service.enrollments.find_all_with_names().await
}

pub async fn list_student_courses(
    service: &EnrollmentService,
    student_id: i64,
) -> Result<Vec<CourseDto>> {
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

    let enrollments = service.enrollments.find_by_student(student_id).await?;
    let mut courses = Vec::with_capacity(enrollments.len());
    for enrollment in enrollments {
        if let Some(course) = service.courses.find_by_id(enrollment.course_id).await? {
            courses.push(CourseDto::from(course));
        }
    }

    Ok(courses)
}
