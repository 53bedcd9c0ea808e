use super::SeaOrmStorage;
use crate::entity::student_courses::{ActiveModel, Column, Entity as StudentCourses};
use crate::errors::{Result, SchoolSystemError};
use crate::models::enrollments::entities::Enrollment;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建选课记录
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Enrollment> {
        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 获取选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = StudentCourses::find_by_id((student_id, course_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 列出全部选课记录
    pub async fn list_enrollments_impl(&self) -> Result<Vec<Enrollment>> {
        let enrollments = StudentCourses::find()
            .order_by_asc(Column::CourseId)
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询选课列表失败: {e}"))
            })?;

        Ok(enrollments
            .into_iter()
            .map(|m| m.into_enrollment())
            .collect())
    }

    /// 列出学生的选课记录
    pub async fn list_enrollments_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Enrollment>> {
        let enrollments = StudentCourses::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::CourseId)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询学生选课失败: {e}"))
            })?;

        Ok(enrollments
            .into_iter()
            .map(|m| m.into_enrollment())
            .collect())
    }

    /// 列出课程的选课记录
    pub async fn list_enrollments_by_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<Enrollment>> {
        let enrollments = StudentCourses::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询课程选课失败: {e}"))
            })?;

        Ok(enrollments
            .into_iter()
            .map(|m| m.into_enrollment())
            .collect())
    }

    /// 删除选课记录
    pub async fn delete_enrollment_impl(&self, student_id: i64, course_id: i64) -> Result<bool> {
        let result = StudentCourses::delete_by_id((student_id, course_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
