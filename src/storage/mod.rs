use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    enrollments::entities::Enrollment,
    grades::{entities::Grade, requests::CreateGradeRequest},
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

#[cfg(test)]
pub mod memory;
pub mod sea_orm_storage;

/// 持久化网关
///
/// 所有方法失败时均返回 `PersistenceFailure`，调用方不做重试。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段为已哈希的密码）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 更新用户信息（password 字段为已哈希的密码）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 列出教师的课程
    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>>;
    // 更新课程
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程，同一事务内删除该课程的成绩与选课记录
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    // 创建选课记录
    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment>;
    // 获取选课记录
    async fn get_enrollment(&self, student_id: i64, course_id: i64)
    -> Result<Option<Enrollment>>;
    // 列出全部选课记录
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>>;
    // 列出学生的选课记录
    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>>;
    // 列出课程的选课记录
    async fn list_enrollments_by_course(&self, course_id: i64) -> Result<Vec<Enrollment>>;
    // 删除选课记录
    async fn delete_enrollment(&self, student_id: i64, course_id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 创建成绩
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    // 批量创建成绩（单个事务）
    async fn create_grades(&self, grades: Vec<CreateGradeRequest>) -> Result<Vec<Grade>>;
    // 通过ID获取成绩
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 获取学生在某课程的成绩
    async fn get_grade_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Grade>>;
    // 列出全部成绩
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    // 列出学生的成绩
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>>;
    // 列出课程的成绩
    async fn list_grades_by_course(&self, course_id: i64) -> Result<Vec<Grade>>;
    // 更新成绩分值
    async fn update_grade(&self, id: i64, value: f64) -> Result<Option<Grade>>;
    // 删除成绩
    async fn delete_grade(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
