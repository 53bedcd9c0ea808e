use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, SchoolSystemError};
use crate::models::grades::{entities::Grade, requests::CreateGradeRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

fn to_active_model(req: CreateGradeRequest) -> ActiveModel {
    ActiveModel {
        student_id: Set(req.student_id),
        course_id: Set(req.course_id),
        value: Set(req.value),
        graded_at: Set(req.date.map(|d| d.timestamp())),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 创建成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let result = to_active_model(req)
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("创建成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 批量创建成绩，任意一条失败则整体回滚
    pub async fn create_grades_impl(&self, reqs: Vec<CreateGradeRequest>) -> Result<Vec<Grade>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("开启事务失败: {e}")))?;

        let mut created = Vec::with_capacity(reqs.len());
        for req in reqs {
            let model = to_active_model(req).insert(&txn).await.map_err(|e| {
                SchoolSystemError::persistence_failure(format!("批量创建成绩失败: {e}"))
            })?;
            created.push(model.into_grade());
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("提交事务失败: {e}")))?;

        Ok(created)
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 获取学生在某课程的成绩
    pub async fn get_grade_by_student_and_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 列出全部成绩
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询成绩列表失败: {e}"))
            })?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 列出学生的成绩
    pub async fn list_grades_by_student_impl(&self, student_id: i64) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询学生成绩失败: {e}"))
            })?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 列出课程的成绩
    pub async fn list_grades_by_course_impl(&self, course_id: i64) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::persistence_failure(format!("查询课程成绩失败: {e}"))
            })?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 更新成绩分值
    pub async fn update_grade_impl(&self, id: i64, value: f64) -> Result<Option<Grade>> {
        let existing = self.get_grade_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            value: Set(value),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("更新成绩失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::persistence_failure(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
