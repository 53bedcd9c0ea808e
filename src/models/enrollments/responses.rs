use super::entities::Enrollment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentDto {
    pub student_id: i64,
    pub course_id: i64,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
        }
    }
}

// 带学生、课程名称的选课详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentDetails {
    pub student_id: i64,
    pub course_id: i64,
    pub student_name: String,
    pub course_name: String,
}
