//! 教师业务
//!
//! 所有操作都显式接收当前教师 ID，并先校验课程归属。

pub mod bulk;
pub mod grade;
pub mod list;
pub mod ownership;
pub mod roster;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::responses::CourseDto;
use crate::models::enrollments::responses::EnrollmentDto;
use crate::models::grades::{
    entities::GradeRange,
    requests::{AssignGradeRequest, BulkGradeEntry},
    responses::{BulkGradeResult, GradeDto},
};
use crate::models::users::responses::UserDto;
use crate::repositories::{CourseRepository, EnrollmentRepository, GradeRepository, UserRepository};
use crate::services::EnrollmentService;
use crate::storage::Storage;

pub struct TeacherService {
    courses: CourseRepository,
    users: UserRepository,
    enrollments: EnrollmentRepository,
    grades: GradeRepository,
    enrollment_service: EnrollmentService,
    range: GradeRange,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_range(storage, GradeRange::from_config())
    }

    pub fn with_range(storage: Arc<dyn Storage>, range: GradeRange) -> Self {
        Self {
            courses: CourseRepository::new(storage.clone()),
            users: UserRepository::new(storage.clone()),
            enrollments: EnrollmentRepository::new(storage.clone()),
            grades: GradeRepository::new(storage.clone()),
            enrollment_service: EnrollmentService::new(storage),
            range,
        }
    }

    // 录入或更新成绩（按学生、课程定位）
    pub async fn assign_or_update_grade(
        &self,
        teacher_id: i64,
        grade_data: AssignGradeRequest,
    ) -> Result<GradeDto> {
        grade::assign_or_update_grade(self, teacher_id, grade_data).await
    }

    // 批量导入成绩（仅新增）
    pub async fn bulk_assign_grades(
        &self,
        teacher_id: i64,
        course_id: i64,
        entries: Vec<BulkGradeEntry>,
    ) -> Result<BulkGradeResult> {
        bulk::bulk_assign_grades(self, teacher_id, course_id, entries).await
    }

    // 向课程添加学生
    pub async fn add_student_to_course(
        &self,
        teacher_id: i64,
        course_id: i64,
        student_id: i64,
    ) -> Result<EnrollmentDto> {
        roster::add_student_to_course(self, teacher_id, course_id, student_id).await
    }

    // 从课程移除学生
    pub async fn remove_student_from_course(
        &self,
        teacher_id: i64,
        course_id: i64,
        student_id: i64,
    ) -> Result<()> {
        roster::remove_student_from_course(self, teacher_id, course_id, student_id).await
    }

    // 课程学生名单
    pub async fn list_students_in_course(
        &self,
        teacher_id: i64,
        course_id: i64,
    ) -> Result<Vec<UserDto>> {
        roster::list_students_in_course(self, teacher_id, course_id).await
    }

    // 教师负责的课程
    pub async fn list_my_courses(&self, teacher_id: i64) -> Result<Vec<CourseDto>> {
        list::list_my_courses(self, teacher_id).await
    }

    // 课程成绩
    pub async fn list_grades_for_course(
        &self,
        teacher_id: i64,
        course_id: i64,
    ) -> Result<Vec<GradeDto>> {
        list::list_grades_for_course(self, teacher_id, course_id).await
    }
}
