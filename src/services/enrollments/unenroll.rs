use tracing::info;

use super::EnrollmentService;
use crate::errors::{Result, SchoolSystemError};

pub async fn unenroll(service: &EnrollmentService, student_id: i64, course_id: i64) -> Result<()> {
    if !service.enrollments.delete(student_id, course_id).await? {
        return Err(SchoolSystemError::enrollment_not_found(format!(
            "Student with ID {student_id} is not enrolled in course {course_id}"
        )));
    }

    info!("Removed student {} from course {}", student_id, course_id);
    Ok(())
}
