use tracing::warn;

use super::TeacherService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::courses::entities::Course;

/// 校验教师负责该课程
///
/// 课程不存在与属于其他教师返回同一错误，不暴露其他教师课程是否存在。
pub async fn ensure_owned(
    service: &TeacherService,
    teacher_id: i64,
    course_id: i64,
) -> Result<Course> {
    service
        .courses
        .find_owned(course_id, teacher_id)
        .await?
        .ok_or_else(|| {
            warn!(
                "Teacher {} attempted to manage course {} without ownership",
                teacher_id, course_id
            );
            SchoolSystemError::not_authorized(format!(
                "Teacher {teacher_id} is not authorized to manage course {course_id}"
            ))
        })
}
