//! 仓储层
//!
//! 每个实体一个仓储，封装对 `Storage` 的访问以及需要在应用层完成的筛选与关联加载。

pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod users;

pub use courses::CourseRepository;
pub use enrollments::EnrollmentRepository;
pub use grades::GradeRepository;
pub use users::UserRepository;
