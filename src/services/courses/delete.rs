use tracing::info;

use super::CourseService;
use crate::errors::{Result, SchoolSystemError};

pub async fn delete_course(service: &CourseService, course_id: i64) -> Result<()> {
    if service.courses.find_by_id(course_id).await?.is_none() {
        return Err(SchoolSystemError::course_not_found(format!(
            "Course with ID {course_id} not found"
        )));
    }

    // 存储层在同一事务内删除成绩与选课记录
    if !service.courses.delete(course_id).await? {
        return Err(SchoolSystemError::course_not_found(format!(
            "Course with ID {course_id} not found"
        )));
    }

    info!("Deleted course {} with its grades and enrollments", course_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;

    #[tokio::test]
    async fn test_delete_cascades_grades() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let student = storage.seed_user("stud", UserRole::Student);
        let course = storage.seed_course("Math", teacher.id);
        let other = storage.seed_course("Art", teacher.id);
        storage.seed_enrollment(student.id, course.id);
        storage.seed_grade(student.id, course.id, 9.0);
        let kept = storage.seed_grade(student.id, other.id, 4.0);
        let service = CourseService::new(storage.clone());

        service.delete_course(course.id).await.unwrap();

        let remaining = storage.list_grades().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
        assert!(
            storage
                .get_enrollment(student.id, course.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_missing_course() {
        let storage = Arc::new(MemoryStorage::new());
        let service = CourseService::new(storage.clone());

        let err = service.delete_course(5).await.unwrap_err();
        assert!(matches!(err, SchoolSystemError::CourseNotFound(_)));
        assert_eq!(storage.calls("delete_course"), 0);
    }
}
