use std::collections::HashSet;

use tracing::{info, warn};

use super::{TeacherService, ownership::ensure_owned};
use crate::errors::{Result, SchoolSystemError};
use crate::models::grades::{
    requests::{BulkGradeEntry, CreateGradeRequest},
    responses::BulkGradeResult,
};
use crate::models::users::entities::UserRole;

/// 批量导入成绩
///
/// 课程归属只校验一次；逐条检查学生、选课、分值与重复，
/// 通过检查的记录一次性写入，其余记录以错误说明返回。
/// 已有成绩的学生不会被覆盖。
pub async fn bulk_assign_grades(
    service: &TeacherService,
    teacher_id: i64,
    course_id: i64,
    entries: Vec<BulkGradeEntry>,
) -> Result<BulkGradeResult> {
    if entries.is_empty() {
        return Err(SchoolSystemError::validation(
            "Grade entries must not be empty",
        ));
    }

    ensure_owned(service, teacher_id, course_id).await?;

    let enrolled: HashSet<i64> = service
        .enrollments
        .find_by_course(course_id)
        .await?
        .into_iter()
        .map(|e| e.student_id)
        .collect();
    let mut graded: HashSet<i64> = service
        .grades
        .find_by_course(course_id)
        .await?
        .into_iter()
        .map(|g| g.student_id)
        .collect();

    let now = chrono::Utc::now();
    let mut accepted = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();

    for BulkGradeEntry { student_id, value } in entries {
        if service
            .users
            .find_with_role(student_id, UserRole::Student)
            .await?
            .is_none()
        {
            errors.push(format!("Student ID {student_id}: Does not exist."));
            continue;
        }
        if !enrolled.contains(&student_id) {
            errors.push(format!(
                "Student ID {student_id}: Not enrolled in course ID {course_id}."
            ));
            continue;
        }
        if !service.range.contains(value) {
            errors.push(format!(
                "Student ID {student_id}: Invalid grade value {value}. Must be {}.",
                service.range
            ));
            continue;
        }
        // 同批次内重复的学生也按已有成绩处理
        if !graded.insert(student_id) {
            errors.push(format!(
                "Student ID {student_id}: Already has a grade for this course. Use update function instead."
            ));
            continue;
        }

        accepted.push(CreateGradeRequest {
            student_id,
            course_id,
            value,
            date: Some(now),
        });
    }

    let successfully_added = if accepted.is_empty() {
        0
    } else {
        service.grades.create_batch(accepted).await?.len()
    };

    if !errors.is_empty() {
        warn!(
            "Bulk grade import for course {} rejected {} entries",
            course_id,
            errors.len()
        );
    }
    info!(
        "Teacher {} imported {} grades into course {}",
        teacher_id, successfully_added, course_id
    );

    Ok(BulkGradeResult {
        course_id,
        successfully_added,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::grades::entities::GradeRange;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;

    fn entry(student_id: i64, value: f64) -> BulkGradeEntry {
        BulkGradeEntry { student_id, value }
    }

    #[tokio::test]
    async fn test_partial_success_keeps_valid_entries() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let course = storage.seed_course("Math", teacher.id);
        let first = storage.seed_user("first", UserRole::Student);
        let second = storage.seed_user("second", UserRole::Student);
        let third = storage.seed_user("third", UserRole::Student);
        storage.seed_enrollment(first.id, course.id);
        storage.seed_enrollment(third.id, course.id);
        let service = TeacherService::with_range(storage.clone(), GradeRange::default());

        let result = service
            .bulk_assign_grades(
                teacher.id,
                course.id,
                vec![entry(first.id, 8.0), entry(second.id, 7.0), entry(third.id, 9.0)],
            )
            .await
            .unwrap();

        assert_eq!(result.course_id, course.id);
        assert_eq!(result.successfully_added, 2);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains(&second.id.to_string()));
        assert!(result.errors[0].contains("Not enrolled"));

        let stored = storage.list_grades_by_course(course.id).await.unwrap();
        let mut students: Vec<i64> = stored.iter().map(|g| g.student_id).collect();
        students.sort();
        assert_eq!(students, vec![first.id, third.id]);
        assert_eq!(storage.calls("create_grades"), 1);
    }

    #[tokio::test]
    async fn test_each_rejection_reason_is_reported() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let course = storage.seed_course("Math", teacher.id);
        let graded = storage.seed_user("graded", UserRole::Student);
        let fresh = storage.seed_user("fresh", UserRole::Student);
        storage.seed_enrollment(graded.id, course.id);
        storage.seed_enrollment(fresh.id, course.id);
        storage.seed_grade(graded.id, course.id, 5.0);
        let service = TeacherService::with_range(storage.clone(), GradeRange::default());

        let result = service
            .bulk_assign_grades(
                teacher.id,
                course.id,
                vec![
                    entry(999, 5.0),
                    entry(fresh.id, 11.0),
                    entry(graded.id, 6.0),
                    entry(fresh.id, 7.0),
                    entry(fresh.id, 8.0),
                ],
            )
            .await
            .unwrap();

        assert_eq!(result.successfully_added, 1);
        assert_eq!(result.errors.len(), 4);
        assert!(result.errors[0].contains("Does not exist"));
        assert!(result.errors[1].contains("Invalid grade value 11"));
        assert!(result.errors[2].contains("Already has a grade"));
        assert!(result.errors[3].contains("Already has a grade"));

        let kept = storage
            .get_grade_by_student_and_course(graded.id, course.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kept.value, 5.0);
    }

    #[tokio::test]
    async fn test_not_owner_writes_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        let owner = storage.seed_user("owner", UserRole::Teacher);
        let other = storage.seed_user("other", UserRole::Teacher);
        let student = storage.seed_user("stud", UserRole::Student);
        let course = storage.seed_course("Math", owner.id);
        storage.seed_enrollment(student.id, course.id);
        let service = TeacherService::with_range(storage.clone(), GradeRange::default());

        let err = service
            .bulk_assign_grades(other.id, course.id, vec![entry(student.id, 8.0)])
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::NotAuthorized(_)));
        assert_eq!(storage.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_batch_write_failure_propagates() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let student = storage.seed_user("stud", UserRole::Student);
        let course = storage.seed_course("Math", teacher.id);
        storage.seed_enrollment(student.id, course.id);
        storage.fail_on("create_grades");
        let service = TeacherService::with_range(storage.clone(), GradeRange::default());

        let err = service
            .bulk_assign_grades(teacher.id, course.id, vec![entry(student.id, 8.0)])
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::PersistenceFailure(_)));
        assert!(storage.list_grades().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch_is_rejected() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let course = storage.seed_course("Math", teacher.id);
        let service = TeacherService::with_range(storage, GradeRange::default());

        let err = service
            .bulk_assign_grades(teacher.id, course.id, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolSystemError::Validation(_)));
    }
}
