use super::entities::Course;
use serde::{Deserialize, Serialize};

// 课程公开信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            teacher_id: course.teacher_id,
        }
    }
}

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<CourseDto>,
    pub total: usize,
}
