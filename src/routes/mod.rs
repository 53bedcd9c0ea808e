pub mod admin;

pub mod auth;

pub mod courses;

pub mod enrollments;

pub mod grades;

pub mod students;

pub mod teacher;

pub mod users;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use grades::configure_grade_routes;
pub use students::configure_student_routes;
pub use teacher::configure_teacher_routes;
pub use users::configure_user_routes;

use std::sync::Arc;

use actix_web::{HttpRequest, web};

use crate::errors::{Result, SchoolSystemError};
use crate::middlewares::RequireJWT;
use crate::models::users::entities::ActingUser;
use crate::storage::Storage;

/// 处理程序共享的存储句柄
pub type StorageData = web::Data<Arc<dyn Storage>>;

// 取出 JWT 中间件写入的当前用户
pub(crate) fn acting_user(req: &HttpRequest) -> Result<ActingUser> {
    RequireJWT::extract_acting_user(req)
        .ok_or_else(|| SchoolSystemError::authentication("Authentication required"))
}

/// 注册全部业务路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_admin_routes)
        .configure(configure_course_routes)
        .configure(configure_enrollment_routes)
        .configure(configure_grade_routes)
        .configure(configure_student_routes)
        .configure(configure_teacher_routes);
}
