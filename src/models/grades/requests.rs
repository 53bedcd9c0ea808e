use serde::Deserialize;

// 管理员录入成绩
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub value: f64,
    #[serde(default)]
    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

// 修改成绩，缺失 value 视为无效值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGradeRequest {
    pub value: Option<f64>,
}

// 教师录入或更新成绩
#[derive(Debug, Clone, Deserialize)]
pub struct AssignGradeRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub value: f64,
}

// 批量导入中的单条记录
#[derive(Debug, Clone, Deserialize)]
pub struct BulkGradeEntry {
    pub student_id: i64,
    pub value: f64,
}

// 批量导入请求
#[derive(Debug, Clone, Deserialize)]
pub struct BulkGradeRequest {
    pub entries: Vec<BulkGradeEntry>,
}
