pub mod enroll;
pub mod list;
pub mod unenroll;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::responses::CourseDto;
use crate::models::enrollments::responses::{EnrollmentDetails, EnrollmentDto};
use crate::repositories::{CourseRepository, EnrollmentRepository, UserRepository};
use crate::storage::Storage;

pub struct EnrollmentService {
    enrollments: EnrollmentRepository,
    users: UserRepository,
    courses: CourseRepository,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            enrollments: EnrollmentRepository::new(storage.clone()),
            users: UserRepository::new(storage.clone()),
            courses: CourseRepository::new(storage),
        }
    }

    // 学生选课
    pub async fn enroll(&self, student_id: i64, course_id: i64) -> Result<EnrollmentDto> {
        enroll::enroll(self, student_id, course_id).await
    }

    // 学生退课
    pub async fn unenroll(&self, student_id: i64, course_id: i64) -> Result<()> {
        unenroll::unenroll(self, student_id, course_id).await
    }

    // 选课详情列表
    pub async fn list_enrollments(&self) -> Result<Vec<EnrollmentDetails>> {
        list::list_enrollments(self).await
    }

    // 学生已选课程
    pub async fn list_student_courses(&self, student_id: i64) -> Result<Vec<CourseDto>> {
        list::list_student_courses(self, student_id).await
    }
}
