use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::{
    entities::Course,
    requests::{CreateCourseRequest, UpdateCourseRequest},
};
use crate::storage::Storage;

#[derive(Clone)]
pub struct CourseRepository {
    storage: Arc<dyn Storage>,
}

impl CourseRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.storage.get_course_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Course>> {
        self.storage.list_courses().await
    }

    pub async fn find_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>> {
        self.storage.list_courses_by_teacher(teacher_id).await
    }

    /// 按课程 ID 与负责教师同时匹配，课程不存在与不归属该教师不作区分
    pub async fn find_owned(&self, course_id: i64, teacher_id: i64) -> Result<Option<Course>> {
        let course = self.storage.get_course_by_id(course_id).await?;
        Ok(course.filter(|c| c.teacher_id == teacher_id))
    }

    pub async fn create(&self, course: CreateCourseRequest) -> Result<Course> {
        self.storage.create_course(course).await
    }

    pub async fn update(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.storage.update_course(id, update).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.storage.delete_course(id).await
    }
}
