use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::grades::{
    entities::Grade, requests::CreateGradeRequest, responses::CourseGradeDto,
};
use crate::storage::Storage;

/// 课程缺失时使用的名称
pub const MISSING_COURSE_NAME: &str = "N/A";

#[derive(Clone)]
pub struct GradeRepository {
    storage: Arc<dyn Storage>,
}

impl GradeRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.storage.get_grade_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Grade>> {
        self.storage.list_grades().await
    }

    pub async fn find_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
        self.storage.list_grades_by_student(student_id).await
    }

    pub async fn find_by_course(&self, course_id: i64) -> Result<Vec<Grade>> {
        self.storage.list_grades_by_course(course_id).await
    }

    pub async fn find_for_pair(&self, student_id: i64, course_id: i64) -> Result<Option<Grade>> {
        self.storage
            .get_grade_by_student_and_course(student_id, course_id)
            .await
    }

    pub async fn values_for_student(&self, student_id: i64) -> Result<Vec<f64>> {
        let grades = self.storage.list_grades_by_student(student_id).await?;
        Ok(grades.into_iter().map(|g| g.value).collect())
    }

    /// 学生的各科成绩，附带课程名称
    pub async fn course_grades_for_student(&self, student_id: i64) -> Result<Vec<CourseGradeDto>> {
        let grades = self.storage.list_grades_by_student(student_id).await?;
        if grades.is_empty() {
            return Ok(Vec::new());
        }

        let course_names: HashMap<i64, String> = self
            .storage
            .list_courses()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(grades
            .into_iter()
            .map(|g| CourseGradeDto {
                course_id: g.course_id,
                course_name: course_names
                    .get(&g.course_id)
                    .cloned()
                    .unwrap_or_else(|| MISSING_COURSE_NAME.to_string()),
                grade_id: g.id,
                value: g.value,
            })
            .collect())
    }

    pub async fn create(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.storage.create_grade(grade).await
    }

    pub async fn create_batch(&self, grades: Vec<CreateGradeRequest>) -> Result<Vec<Grade>> {
        self.storage.create_grades(grades).await
    }

    pub async fn update_value(&self, id: i64, value: f64) -> Result<Option<Grade>> {
        self.storage.update_grade(id, value).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.storage.delete_grade(id).await
    }
}
