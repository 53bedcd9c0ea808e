use super::GradeService;
use crate::errors::Result;
use crate::models::grades::responses::CourseGradeDto;

/// 平均分保留两位小数（银行家舍入），无成绩时为 None
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((mean * 100.0).round_ties_even() / 100.0)
}

pub async fn average_for_student(service: &GradeService, student_id: i64) -> Result<Option<f64>> {
    let values = service.grades.values_for_student(student_id).await?;
    Ok(average(&values))
}

pub async fn course_grades_for_student(
    service: &GradeService,
    student_id: i64,
) -> Result<Vec<CourseGradeDto>> {
    service.grades.course_grades_for_student(student_id).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::grades::entities::GradeRange;
    use crate::models::users::entities::UserRole;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn test_average_rounding() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[7.0]), Some(7.0));
        assert_eq!(average(&[7.0, 8.0, 9.0]), Some(8.0));
        assert_eq!(average(&[8.0, 9.0, 9.0]), Some(8.67));
        assert_eq!(average(&[1.0, 2.0, 2.0]), Some(1.67));
        // 8.125 可精确表示，舍入到偶数
        assert_eq!(average(&[8.125]), Some(8.12));
    }

    #[tokio::test]
    async fn test_student_without_grades_has_no_average() {
        let storage = Arc::new(MemoryStorage::new());
        let student = storage.seed_user("stud", UserRole::Student);
        let service = GradeService::with_range(storage, GradeRange::default());

        assert_eq!(service.average_for_student(student.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_student_average() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let student = storage.seed_user("stud", UserRole::Student);
        let math = storage.seed_course("Math", teacher.id);
        let art = storage.seed_course("Art", teacher.id);
        storage.seed_grade(student.id, math.id, 8.0);
        storage.seed_grade(student.id, art.id, 9.5);
        let service = GradeService::with_range(storage, GradeRange::default());

        assert_eq!(
            service.average_for_student(student.id).await.unwrap(),
            Some(8.75)
        );
        let rows = service.course_grades_for_student(student.id).await.unwrap();
        assert_eq!(rows.len(), 2);
    }
}
