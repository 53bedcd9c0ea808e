use super::{TeacherService, ownership::ensure_owned};
use crate::errors::Result;
use crate::models::enrollments::responses::EnrollmentDto;
use crate::models::users::{entities::UserRole, responses::UserDto};

pub async fn add_student_to_course(
    service: &TeacherService,
    teacher_id: i64,
    course_id: i64,
    student_id: i64,
) -> Result<EnrollmentDto> {
    ensure_owned(service, teacher_id, course_id).await?;
    service.enrollment_service.enroll(student_id, course_id).await
}

pub async fn remove_student_from_course(
    service: &TeacherService,
    teacher_id: i64,
    course_id: i64,
    student_id: i64,
) -> Result<()> {
    ensure_owned(service, teacher_id, course_id).await?;
    service
        .enrollment_service
        .unenroll(student_id, course_id)
        .await
}

pub async fn list_students_in_course(
    service: &TeacherService,
    teacher_id: i64,
    course_id: i64,
) -> Result<Vec<UserDto>> {
    ensure_owned(service, teacher_id, course_id).await?;

    let enrollments = service.enrollments.find_by_course(course_id).await?;
    let mut students = Vec::with_capacity(enrollments.len());
    for enrollment in enrollments {
        if let Some(student) = service
            .users
            .find_with_role(enrollment.student_id, UserRole::Student)
            .await?
        {
            students.push(UserDto::from(student));
        }
    }

    Ok(students)
}
