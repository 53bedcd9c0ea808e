pub mod create;
pub mod delete;
pub mod list;
pub mod stats;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::grades::{
    entities::GradeRange,
    requests::{CreateGradeRequest, UpdateGradeRequest},
    responses::{CourseGradeDto, GradeDto},
};
use crate::repositories::{CourseRepository, GradeRepository, UserRepository};
use crate::storage::Storage;

/// 管理员成绩服务
///
/// 该路径不要求学生已选修对应课程。
pub struct GradeService {
    grades: GradeRepository,
    users: UserRepository,
    courses: CourseRepository,
    range: GradeRange,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_range(storage, GradeRange::from_config())
    }

    pub fn with_range(storage: Arc<dyn Storage>, range: GradeRange) -> Self {
        Self {
            grades: GradeRepository::new(storage.clone()),
            users: UserRepository::new(storage.clone()),
            courses: CourseRepository::new(storage),
            range,
        }
    }

    // 录入成绩
    pub async fn create_grade(&self, grade_data: CreateGradeRequest) -> Result<GradeDto> {
        create::create_grade(self, grade_data).await
    }

    // 修改成绩
    pub async fn update_grade(
        &self,
        grade_id: i64,
        update_data: UpdateGradeRequest,
    ) -> Result<GradeDto> {
        update::update_grade(self, grade_id, update_data).await
    }

    // 删除成绩
    pub async fn delete_grade(&self, grade_id: i64) -> Result<()> {
        delete::delete_grade(self, grade_id).await
    }

    // 获取成绩
    pub async fn get_grade(&self, grade_id: i64) -> Result<GradeDto> {
        list::get_grade(self, grade_id).await
    }

    // 成绩列表
    pub async fn list_grades(&self) -> Result<Vec<GradeDto>> {
        list::list_grades(self).await
    }

    // 学生平均分
    pub async fn average_for_student(&self, student_id: i64) -> Result<Option<f64>> {
        stats::average_for_student(self, student_id).await
    }

    // 学生各科成绩
    pub async fn course_grades_for_student(&self, student_id: i64) -> Result<Vec<CourseGradeDto>> {
        stats::course_grades_for_student(self, student_id).await
    }
}
