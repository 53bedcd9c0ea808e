use serde::Deserialize;

// 管理员选课请求
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_id: i64,
}

// 教师向课程添加学生
#[derive(Debug, Clone, Deserialize)]
pub struct AddStudentRequest {
    pub student_id: i64,
}
