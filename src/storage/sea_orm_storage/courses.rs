use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::grades::{Column as GradeColumn, Entity as Grades};
use crate::entity::student_courses::{Column as StudentCourseColumn, Entity as StudentCourses};
use crate::errors::{Result, SchoolSystemError};
use crate::models::courses::{
    entities::Course,
    requests::{CreateCourseRequest, UpdateCourseRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询课程列表失败: {e}"))
            })?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 列出教师负责的课程
    pub async fn list_courses_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询教师课程失败: {e}"))
            })?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程，连同成绩与选课记录
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("开启事务失败: {e}")))?;

        Grades::delete_many()
            .filter(GradeColumn::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("删除课程成绩失败: {e}"))
            })?;

        StudentCourses::delete_many()
            .filter(StudentCourseColumn::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("删除课程选课记录失败: {e}"))
            })?;

        let result = Courses::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("删除课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
