use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::enrollments::{entities::Enrollment, responses::EnrollmentDetails};
use crate::storage::Storage;

#[derive(Clone)]
pub struct EnrollmentRepository {
    storage: Arc<dyn Storage>,
}

impl EnrollmentRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn find(&self, student_id: i64, course_id: i64) -> Result<Option<Enrollment>> {
        self.storage.get_enrollment(student_id, course_id).await
    }

    pub async fn exists(&self, student_id: i64, course_id: i64) -> Result<bool> {
        Ok(self.find(student_id, course_id).await?.is_some())
    }

    pub async fn find_all(&self) -> Result<Vec<Enrollment>> {
        self.storage.list_enrollments().await
    }

    pub async fn find_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        self.storage.list_enrollments_by_student(student_id).await
    }

    pub async fn find_by_course(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        self.storage.list_enrollments_by_course(course_id).await
    }

    /// 加载全部选课记录并关联学生姓名、课程名称
    ///
    /// 关联对象缺失的记录会被跳过。结果按课程名、学生全名排序（按字节比较）。
    pub async fn find_all_with_names(&self) -> Result<Vec<EnrollmentDetails>> {
        let enrollments = self.storage.list_enrollments().await?;
        let students: HashMap<i64, String> = self
            .storage
            .list_users()
            .await?
            .into_iter()
            .map(|u| (u.id, u.full_name()))
            .collect();
        let courses: HashMap<i64, String> = self
            .storage
            .list_courses()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let mut details: Vec<EnrollmentDetails> = enrollments
            .into_iter()
            .filter_map(|e| {
                let student_name = students.get(&e.student_id)?.clone();
                let course_name = courses.get(&e.course_id)?.clone();
                Some(EnrollmentDetails {
                    student_id: e.student_id,
                    course_id: e.course_id,
                    student_name,
                    course_name,
                })
            })
            .collect();

        details.sort_by(|a, b| {
            a.course_name
                .cmp(&b.course_name)
                .then_with(|| a.student_name.cmp(&b.student_name))
        });

        Ok(details)
    }

    pub async fn create(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        self.storage.create_enrollment(student_id, course_id).await
    }

    pub async fn delete(&self, student_id: i64, course_id: i64) -> Result<bool> {
        self.storage.delete_enrollment(student_id, course_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::storage::memory::MemoryStorage;

    #[tokio::test]
    async fn test_details_sorted_by_course_then_student() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("t", UserRole::Teacher);
        let bob = storage.seed_user("bob", UserRole::Student);
        let alice = storage.seed_user("alice", UserRole::Student);
        let math = storage.seed_course("Math", teacher.id);
        let art = storage.seed_course("Art", teacher.id);
        let lower = storage.seed_course("algebra", teacher.id);
        storage.seed_enrollment(bob.id, math.id);
        storage.seed_enrollment(alice.id, math.id);
        storage.seed_enrollment(bob.id, art.id);
        storage.seed_enrollment(alice.id, lower.id);

        let repo = EnrollmentRepository::new(storage);
        let details = repo.find_all_with_names().await.unwrap();
        let order: Vec<(&str, &str)> = details
            .iter()
            .map(|d| (d.course_name.as_str(), d.student_name.as_str()))
            .collect();

        // 大写字母排在小写字母之前
        assert_eq!(
            order,
            vec![
                ("Art", "bob-first bob-last"),
                ("Math", "alice-first alice-last"),
                ("Math", "bob-first bob-last"),
                ("algebra", "alice-first alice-last"),
            ]
        );
    }
}
