use tracing::{info, warn};

use super::{UserService, not_found_for};
use crate::errors::{Result, SchoolSystemError};
use crate::models::users::entities::UserRole;

pub async fn delete_user(
    service: &UserService,
    user_id: i64,
    expected_role: Option<UserRole>,
) -> Result<()> {
    let user = service
        .users
        .find_by_id(user_id)
        .await?
        .filter(|u| expected_role.is_none_or(|role| u.role == role))
        .ok_or_else(|| not_found_for(expected_role, user_id))?;

    match user.role {
        // 教师仍负责课程时不可删除
        UserRole::Teacher => {
            let courses = service.courses.find_by_teacher(user_id).await?;
            if !courses.is_empty() {
                warn!(
                    "Teacher {} still owns {} course(s), refusing delete",
                    user_id,
                    courses.len()
                );
                return Err(SchoolSystemError::has_dependent_courses(format!(
                    "Teacher with ID {user_id} is assigned to {} course(s)",
                    courses.len()
                )));
            }
        }
        // 学生有成绩或选课记录时不可删除
        UserRole::Student => {
            if !service.grades.find_by_student(user_id).await?.is_empty() {
                warn!("Student {} still has grades, refusing delete", user_id);
                return Err(SchoolSystemError::has_dependent_grades(format!(
                    "Student with ID {user_id} has grades"
                )));
            }
            if !service.enrollments.find_by_student(user_id).await?.is_empty() {
                warn!("Student {} still has enrollments, refusing delete", user_id);
                return Err(SchoolSystemError::has_dependent_enrollments(format!(
                    "Student with ID {user_id} is enrolled in courses"
                )));
            }
        }
        UserRole::Admin => {}
    }

    if !service.users.delete(user_id).await? {
        return Err(not_found_for(expected_role, user_id));
    }

    info!("Deleted {} with ID {}", user.role, user_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;

    #[tokio::test]
    async fn test_teacher_with_course_is_not_deleted() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        storage.seed_course("Math", teacher.id);
        let service = UserService::new(storage.clone());

        let err = service
            .delete_user(teacher.id, Some(UserRole::Teacher))
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::HasDependentCourses(_)));
        assert_eq!(storage.calls("delete_user"), 0);
        assert!(storage.get_user_by_id(teacher.id).await.unwrap().is_some());

        let course = storage.list_courses_by_teacher(teacher.id).await.unwrap();
        storage.delete_course(course[0].id).await.unwrap();
        service
            .delete_user(teacher.id, Some(UserRole::Teacher))
            .await
            .unwrap();
        assert!(storage.get_user_by_id(teacher.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_student_with_grade_reports_grades_first() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let student = storage.seed_user("stud", UserRole::Student);
        let course = storage.seed_course("Math", teacher.id);
        storage.seed_enrollment(student.id, course.id);
        storage.seed_grade(student.id, course.id, 7.0);
        let service = UserService::new(storage.clone());

        let err = service
            .delete_user(student.id, Some(UserRole::Student))
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::HasDependentGrades(_)));
        assert_eq!(storage.calls("delete_user"), 0);
    }

    #[tokio::test]
    async fn test_student_with_enrollment_only() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teach", UserRole::Teacher);
        let student = storage.seed_user("stud", UserRole::Student);
        let course = storage.seed_course("Math", teacher.id);
        storage.seed_enrollment(student.id, course.id);
        let service = UserService::new(storage.clone());

        let err = service.delete_user(student.id, None).await.unwrap_err();
        assert!(matches!(err, SchoolSystemError::HasDependentEnrollments(_)));
        assert_eq!(storage.calls("delete_user"), 0);
    }

    #[tokio::test]
    async fn test_role_specific_delete_of_wrong_role_is_not_found() {
        let storage = Arc::new(MemoryStorage::new());
        let student = storage.seed_user("stud", UserRole::Student);
        let service = UserService::new(storage.clone());

        let err = service
            .delete_user(student.id, Some(UserRole::Teacher))
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolSystemError::TeacherNotFound(_)));

        let err = service.delete_user(404, None).await.unwrap_err();
        assert!(matches!(err, SchoolSystemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_free_student_is_deleted() {
        let storage = Arc::new(MemoryStorage::new());
        let student = storage.seed_user("stud", UserRole::Student);
        let service = UserService::new(storage.clone());

        service
            .delete_user(student.id, Some(UserRole::Student))
            .await
            .unwrap();
        assert!(storage.get_user_by_id(student.id).await.unwrap().is_none());
    }
}
