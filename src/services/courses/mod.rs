pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::{
    requests::{CreateCourseRequest, UpdateCourseRequest},
    responses::CourseDto,
};
use crate::repositories::{CourseRepository, UserRepository};
use crate::storage::Storage;

pub struct CourseService {
    courses: CourseRepository,
    users: UserRepository,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            courses: CourseRepository::new(storage.clone()),
            users: UserRepository::new(storage),
        }
    }

    // 创建课程
    pub async fn create_course(&self, course_data: CreateCourseRequest) -> Result<CourseDto> {
        create::create_course(self, course_data).await
    }

    // 删除课程（连同成绩与选课记录）
    pub async fn delete_course(&self, course_id: i64) -> Result<()> {
        delete::delete_course(self, course_id).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> Result<CourseDto> {
        update::update_course(self, course_id, update_data).await
    }

    // 获取课程
    pub async fn get_course(&self, course_id: i64) -> Result<CourseDto> {
        get::get_course(self, course_id).await
    }

    // 课程列表
    pub async fn list_courses(&self) -> Result<Vec<CourseDto>> {
        get::list_courses(self).await
    }
}
