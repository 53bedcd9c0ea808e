use super::entities::Grade;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeDto {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub value: f64,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<Grade> for GradeDto {
    fn from(grade: Grade) -> Self {
        Self {
            id: grade.id,
            student_id: grade.student_id,
            course_id: grade.course_id,
            value: grade.value,
            date: grade.date,
        }
    }
}

// 学生某门课程的成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGradeDto {
    pub course_id: i64,
    /// 课程不存在时为 "N/A"
    pub course_name: String,
    pub grade_id: i64,
    pub value: f64,
}

// 学生平均分，无成绩时为 null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAverageResponse {
    pub student_id: i64,
    pub average: Option<f64>,
}

// 批量导入结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkGradeResult {
    pub course_id: i64,
    pub successfully_added: usize,
    pub errors: Vec<String>,
}
