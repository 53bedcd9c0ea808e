pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::{Result, SchoolSystemError};
use crate::models::users::{
    entities::UserRole,
    requests::{CreateUserRequest, UpdateUserRequest},
    responses::UserDto,
};
use crate::repositories::{CourseRepository, EnrollmentRepository, GradeRepository, UserRepository};
use crate::storage::Storage;

pub struct UserService {
    users: UserRepository,
    courses: CourseRepository,
    enrollments: EnrollmentRepository,
    grades: GradeRepository,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            users: UserRepository::new(storage.clone()),
            courses: CourseRepository::new(storage.clone()),
            enrollments: EnrollmentRepository::new(storage.clone()),
            grades: GradeRepository::new(storage),
        }
    }

    // 创建用户，expected_role 为目标子类型（None 表示通用接口）
    pub async fn create_user(
        &self,
        expected_role: Option<UserRole>,
        user_data: CreateUserRequest,
    ) -> Result<UserDto> {
        create::create_user(self, expected_role, user_data).await
    }

    // 删除用户
    pub async fn delete_user(&self, user_id: i64, expected_role: Option<UserRole>) -> Result<()> {
        delete::delete_user(self, user_id, expected_role).await
    }

    // 更新用户信息
    pub async fn update_user(&self, user_id: i64, update_data: UpdateUserRequest) -> Result<UserDto> {
        update::update_user(self, user_id, update_data).await
    }

    // 根据ID获取用户
    pub async fn get_user(&self, user_id: i64) -> Result<UserDto> {
        list::get_user(self, user_id).await
    }

    // 获取用户列表
    pub async fn list_users(&self, role: Option<UserRole>) -> Result<Vec<UserDto>> {
        list::list_users(self, role).await
    }

    pub async fn list_teachers(&self) -> Result<Vec<UserDto>> {
        list::list_users(self, Some(UserRole::Teacher)).await
    }

    pub async fn list_students(&self) -> Result<Vec<UserDto>> {
        list::list_users(self, Some(UserRole::Student)).await
    }

    pub async fn list_admins(&self) -> Result<Vec<UserDto>> {
        list::list_users(self, Some(UserRole::Admin)).await
    }
}

/// 按目标角色生成“不存在”错误
pub(crate) fn not_found_for(role: Option<UserRole>, user_id: i64) -> SchoolSystemError {
    match role {
        Some(UserRole::Teacher) => {
            SchoolSystemError::teacher_not_found(format!("Teacher with ID {user_id} not found"))
        }
        Some(UserRole::Student) => {
            SchoolSystemError::student_not_found(format!("Student with ID {user_id} not found"))
        }
        _ => SchoolSystemError::not_found(format!("User with ID {user_id} not found")),
    }
}
