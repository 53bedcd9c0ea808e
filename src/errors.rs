//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，每个变体同时绑定业务错误码、类型名称与 HTTP 状态码。
//! 服务层返回 `Result<T>`，路由层通过 `?` 直接传播，由 `ResponseError` 统一转换为响应。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回业务错误码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - status() 方法 - 返回 HTTP 状态码
/// - 便捷构造函数
macro_rules! define_school_errors {
    ($(
        $variant:ident($code:expr, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum SchoolSystemError {
            $($variant(String),)*
        }

        impl SchoolSystemError {
            /// 获取业务错误码
            pub fn code(&self) -> ErrorCode {
                match self {
                    $(SchoolSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSystemError::$variant(msg) => msg,)*
                }
            }

            /// 获取对应的 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(SchoolSystemError::$variant(_) => StatusCode::$status,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_errors! {
    // 资源不存在
    NotFound(ErrorCode::NotFound, "Resource Not Found", NOT_FOUND),
    StudentNotFound(ErrorCode::StudentNotFound, "Student Not Found", NOT_FOUND),
    TeacherNotFound(ErrorCode::TeacherNotFound, "Teacher Not Found", NOT_FOUND),
    CourseNotFound(ErrorCode::CourseNotFound, "Course Not Found", NOT_FOUND),
    GradeNotFound(ErrorCode::GradeNotFound, "Grade Not Found", NOT_FOUND),
    EnrollmentNotFound(ErrorCode::EnrollmentNotFound, "Enrollment Not Found", NOT_FOUND),
    // 业务规则校验
    DuplicateUsername(ErrorCode::UserNameAlreadyExists, "Duplicate Username", BAD_REQUEST),
    InvalidRole(ErrorCode::UserRoleInvalid, "Invalid Role", BAD_REQUEST),
    InvalidValue(ErrorCode::GradeValueInvalid, "Invalid Grade Value", BAD_REQUEST),
    AlreadyEnrolled(ErrorCode::AlreadyEnrolled, "Already Enrolled", BAD_REQUEST),
    StudentNotEnrolled(ErrorCode::StudentNotEnrolled, "Student Not Enrolled", BAD_REQUEST),
    HasDependentCourses(ErrorCode::TeacherHasCourses, "Has Dependent Courses", BAD_REQUEST),
    HasDependentGrades(ErrorCode::StudentHasGrades, "Has Dependent Grades", BAD_REQUEST),
    HasDependentEnrollments(ErrorCode::StudentHasEnrollments, "Has Dependent Enrollments", BAD_REQUEST),
    Validation(ErrorCode::BadRequest, "Validation Error", BAD_REQUEST),
    // 认证与授权
    Authentication(ErrorCode::AuthFailed, "Authentication Error", UNAUTHORIZED),
    NotAuthorized(ErrorCode::Forbidden, "Authorization Error", FORBIDDEN),
    // 基础设施
    PersistenceFailure(ErrorCode::DatabaseError, "Persistence Failure", INTERNAL_SERVER_ERROR),
    DatabaseConfig(ErrorCode::DatabaseError, "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection(ErrorCode::DatabaseError, "Database Connection Error", INTERNAL_SERVER_ERROR),
    Serialization(ErrorCode::InternalServerError, "Serialization Error", INTERNAL_SERVER_ERROR),
}

impl SchoolSystemError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为服务端内部错误
    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }
}

impl fmt::Display for SchoolSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolSystemError {}

impl ResponseError for SchoolSystemError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        // 内部错误只记录日志，不把细节暴露给客户端
        let message = if self.is_internal() {
            error!("{}", self.format_simple());
            "Internal server error".to_string()
        } else {
            self.message().to_string()
        };

        HttpResponse::build(self.status())
            .json(ApiResponse::<()>::error_empty(self.code(), message))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolSystemError::PersistenceFailure(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolSystemError {
    fn from(err: serde_json::Error) -> Self {
        SchoolSystemError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolSystemError>;
