use tracing::{debug, info};

use super::{TeacherService, ownership::ensure_owned};
use crate::errors::{Result, SchoolSystemError};
use crate::models::grades::{
    requests::{AssignGradeRequest, CreateGradeRequest},
    responses::GradeDto,
};

pub async fn assign_or_update_grade(
    service: &TeacherService,
    teacher_id: i64,
    grade_data: AssignGradeRequest,
) -> Result<GradeDto> {
    let AssignGradeRequest {
        student_id,
        course_id,
        value,
    } = grade_data;

    if !service.range.contains(value) {
        return Err(SchoolSystemError::invalid_value(format!(
            "Invalid grade value {value}. Must be {}.",
            service.range
        )));
    }

    ensure_owned(service, teacher_id, course_id).await?;

    if !service.enrollments.exists(student_id, course_id).await? {
        return Err(SchoolSystemError::student_not_enrolled(format!(
            "Student with ID {student_id} is not enrolled in course {course_id}"
        )));
    }

    // 以 (学生, 课程) 为键：已有成绩则更新，否则新增
    let grade = match service.grades.find_for_pair(student_id, course_id).await? {
        Some(existing) if existing.value == value => {
            debug!("Grade {} unchanged, skipping write", existing.id);
            existing
        }
        Some(existing) => service
            .grades
            .update_value(existing.id, value)
            .await?
            .ok_or_else(|| {
                SchoolSystemError::grade_not_found(format!(
                    "Grade with ID {} not found",
                    existing.id
                ))
            })?,
        None => {
            service
                .grades
                .create(CreateGradeRequest {
                    student_id,
                    course_id,
                    value,
                    date: Some(chrono::Utc::now()),
                })
                .await?
        }
    };

    info!(
        "Teacher {} set grade {} for student {} in course {}",
        teacher_id, grade.value, student_id, course_id
    );
    Ok(GradeDto::from(grade))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::grades::entities::GradeRange;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;

    struct Fixture {
        storage: Arc<MemoryStorage>,
        service: TeacherService,
        teacher_id: i64,
        student_id: i64,
        course_id: i64,
    }

    fn fixture() -> Fixture {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let student = storage.seed_user("stud", UserRole::Student);
        let course = storage.seed_course("Math", teacher.id);
        storage.seed_enrollment(student.id, course.id);
        let service = TeacherService::with_range(storage.clone(), GradeRange::default());
        Fixture {
            storage,
            service,
            teacher_id: teacher.id,
            student_id: student.id,
            course_id: course.id,
        }
    }

    fn assign(f: &Fixture, value: f64) -> AssignGradeRequest {
        AssignGradeRequest {
            student_id: f.student_id,
            course_id: f.course_id,
            value,
        }
    }

    #[tokio::test]
    async fn test_upsert_keeps_single_grade_per_pair() {
        let f = fixture();

        let first = f
            .service
            .assign_or_update_grade(f.teacher_id, assign(&f, 6.0))
            .await
            .unwrap();
        let second = f
            .service
            .assign_or_update_grade(f.teacher_id, assign(&f, 9.0))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.value, 9.0);
        assert_eq!(f.storage.list_grades().await.unwrap().len(), 1);
        assert_eq!(f.storage.calls("create_grade"), 1);
        assert_eq!(f.storage.calls("update_grade"), 1);
    }

    #[tokio::test]
    async fn test_other_teacher_is_not_authorized() {
        let f = fixture();
        let intruder = f.storage.seed_user("intruder", UserRole::Teacher);

        let err = f
            .service
            .assign_or_update_grade(intruder.id, assign(&f, 6.0))
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::NotAuthorized(_)));
        assert_eq!(f.storage.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_student_must_be_enrolled() {
        let f = fixture();
        let outsider = f.storage.seed_user("outsider", UserRole::Student);

        let err = f
            .service
            .assign_or_update_grade(
                f.teacher_id,
                AssignGradeRequest {
                    student_id: outsider.id,
                    course_id: f.course_id,
                    value: 7.0,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::StudentNotEnrolled(_)));
        assert_eq!(f.storage.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_value_checked_before_anything_else() {
        let f = fixture();

        let err = f
            .service
            .assign_or_update_grade(f.teacher_id, assign(&f, 12.0))
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::InvalidValue(_)));
        assert_eq!(f.storage.calls("get_course_by_id"), 0);
    }
}
