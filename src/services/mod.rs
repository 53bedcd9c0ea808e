pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod teachers;
pub mod users;

pub use auth::AuthService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use teachers::TeacherService;
pub use users::UserService;
