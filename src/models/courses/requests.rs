use serde::Deserialize;

// 课程创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub teacher_id: i64,
}

// 课程更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub teacher_id: Option<i64>,
}
