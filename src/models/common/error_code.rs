use serde::Serialize;

/// 业务错误码
///
/// 随响应体中的 `code` 字段返回，`0` 表示成功。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,

    // 认证错误
    AuthFailed = 2000,

    // 用户错误
    UserNotFound = 3000,
    UserNameAlreadyExists = 3001,
    UserRoleInvalid = 3002,
    StudentNotFound = 3003,
    TeacherNotFound = 3004,
    TeacherHasCourses = 3005,
    StudentHasGrades = 3006,
    StudentHasEnrollments = 3007,

    // 课程错误
    CourseNotFound = 4000,

    // 选课错误
    EnrollmentNotFound = 5000,
    AlreadyEnrolled = 5001,
    StudentNotEnrolled = 5002,

    // 成绩错误
    GradeNotFound = 6000,
    GradeValueInvalid = 6001,

    // 存储错误
    DatabaseError = 9000,
}
