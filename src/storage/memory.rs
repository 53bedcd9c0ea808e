//! 内存存储实现（仅用于测试）
//!
//! 记录每个入口的调用次数，并可让指定入口返回 `PersistenceFailure`。

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::Storage;
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    enrollments::entities::Enrollment,
    grades::{entities::Grade, requests::CreateGradeRequest},
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    courses: BTreeMap<i64, Course>,
    enrollments: BTreeMap<(i64, i64), Enrollment>,
    grades: BTreeMap<i64, Grade>,
    next_user_id: i64,
    next_course_id: i64,
    next_grade_id: i64,
}

#[derive(Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: Mutex<HashSet<&'static str>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 某入口被调用的次数
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    /// 所有写入口的调用总数
    pub fn write_calls(&self) -> usize {
        const WRITES: &[&str] = &[
            "create_user",
            "update_user",
            "delete_user",
            "create_course",
            "update_course",
            "delete_course",
            "create_enrollment",
            "delete_enrollment",
            "create_grade",
            "create_grades",
            "update_grade",
            "delete_grade",
        ];
        WRITES.iter().map(|m| self.calls(m)).sum()
    }

    /// 让指定入口此后返回持久化错误
    pub fn fail_on(&self, method: &'static str) {
        self.failing.lock().unwrap().insert(method);
    }

    fn record(&self, method: &'static str) -> Result<()> {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
        if self.failing.lock().unwrap().contains(method) {
            return Err(SchoolSystemError::persistence_failure(format!(
                "{method}: simulated failure"
            )));
        }
        Ok(())
    }

    // 测试数据辅助方法，不计入调用次数

    pub fn seed_user(&self, username: &str, role: UserRole) -> User {
        let mut state = self.state.lock().unwrap();
        state.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            id: state.next_user_id,
            username: username.to_string(),
            first_name: format!("{username}-first"),
            last_name: format!("{username}-last"),
            password_hash: String::new(),
            role,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());
        user
    }

    pub fn seed_course(&self, name: &str, teacher_id: i64) -> Course {
        let mut state = self.state.lock().unwrap();
        state.next_course_id += 1;
        let now = Utc::now();
        let course = Course {
            id: state.next_course_id,
            name: name.to_string(),
            teacher_id,
            created_at: now,
            updated_at: now,
        };
        state.courses.insert(course.id, course.clone());
        course
    }

    pub fn seed_enrollment(&self, student_id: i64, course_id: i64) {
        let mut state = self.state.lock().unwrap();
        state.enrollments.insert(
            (student_id, course_id),
            Enrollment {
                student_id,
                course_id,
                enrolled_at: Utc::now(),
            },
        );
    }

    pub fn seed_grade(&self, student_id: i64, course_id: i64, value: f64) -> Grade {
        let mut state = self.state.lock().unwrap();
        state.next_grade_id += 1;
        let grade = Grade {
            id: state.next_grade_id,
            student_id,
            course_id,
            value,
            date: None,
        };
        state.grades.insert(grade.id, grade.clone());
        grade
    }

    fn insert_grade(state: &mut State, req: CreateGradeRequest) -> Grade {
        state.next_grade_id += 1;
        let grade = Grade {
            id: state.next_grade_id,
            student_id: req.student_id,
            course_id: req.course_id,
            value: req.value,
            date: req.date,
        };
        state.grades.insert(grade.id, grade.clone());
        grade
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.record("create_user")?;
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.username == user.username) {
            return Err(SchoolSystemError::duplicate_username(format!(
                "Username '{}' already exists",
                user.username
            )));
        }
        state.next_user_id += 1;
        let now = Utc::now();
        let created = User {
            id: state.next_user_id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            password_hash: user.password,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.record("get_user_by_id")?;
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.record("get_user_by_username")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.record("list_users")?;
        Ok(self.state.lock().unwrap().users.values().cloned().collect())
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.record("update_user")?;
        let mut state = self.state.lock().unwrap();
        let Some(user) = state.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(password) = update.password {
            user.password_hash = password;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.record("delete_user")?;
        Ok(self.state.lock().unwrap().users.remove(&id).is_some())
    }

    async fn count_users(&self) -> Result<u64> {
        self.record("count_users")?;
        Ok(self.state.lock().unwrap().users.len() as u64)
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.record("create_course")?;
        let mut state = self.state.lock().unwrap();
        state.next_course_id += 1;
        let now = Utc::now();
        let created = Course {
            id: state.next_course_id,
            name: course.name,
            teacher_id: course.teacher_id,
            created_at: now,
            updated_at: now,
        };
        state.courses.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.record("get_course_by_id")?;
        Ok(self.state.lock().unwrap().courses.get(&id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.record("list_courses")?;
        Ok(self.state.lock().unwrap().courses.values().cloned().collect())
    }

    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>> {
        self.record("list_courses_by_teacher")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .courses
            .values()
            .filter(|c| c.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.record("update_course")?;
        let mut state = self.state.lock().unwrap();
        let Some(course) = state.courses.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            course.name = name;
        }
        if let Some(teacher_id) = update.teacher_id {
            course.teacher_id = teacher_id;
        }
        course.updated_at = Utc::now();
        Ok(Some(course.clone()))
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.record("delete_course")?;
        let mut state = self.state.lock().unwrap();
        state.grades.retain(|_, g| g.course_id != id);
        state.enrollments.retain(|(_, course_id), _| *course_id != id);
        Ok(state.courses.remove(&id).is_some())
    }

    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        self.record("create_enrollment")?;
        let mut state = self.state.lock().unwrap();
        if state.enrollments.contains_key(&(student_id, course_id)) {
            return Err(SchoolSystemError::persistence_failure(
                "UNIQUE constraint failed: student_courses.student_id, student_courses.course_id",
            ));
        }
        let enrollment = Enrollment {
            student_id,
            course_id,
            enrolled_at: Utc::now(),
        };
        state
            .enrollments
            .insert((student_id, course_id), enrollment.clone());
        Ok(enrollment)
    }

    async fn get_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.record("get_enrollment")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .enrollments
            .get(&(student_id, course_id))
            .cloned())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        self.record("list_enrollments")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .enrollments
            .values()
            .cloned()
            .collect())
    }

    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        self.record("list_enrollments_by_student")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .enrollments
            .values()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_enrollments_by_course(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        self.record("list_enrollments_by_course")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .enrollments
            .values()
            .filter(|e| e.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn delete_enrollment(&self, student_id: i64, course_id: i64) -> Result<bool> {
        self.record("delete_enrollment")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .enrollments
            .remove(&(student_id, course_id))
            .is_some())
    }

    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.record("create_grade")?;
        let mut state = self.state.lock().unwrap();
        Ok(Self::insert_grade(&mut state, grade))
    }

    async fn create_grades(&self, grades: Vec<CreateGradeRequest>) -> Result<Vec<Grade>> {
        self.record("create_grades")?;
        let mut state = self.state.lock().unwrap();
        Ok(grades
            .into_iter()
            .map(|g| Self::insert_grade(&mut state, g))
            .collect())
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.record("get_grade_by_id")?;
        Ok(self.state.lock().unwrap().grades.get(&id).cloned())
    }

    async fn get_grade_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Grade>> {
        self.record("get_grade_by_student_and_course")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .grades
            .values()
            .find(|g| g.student_id == student_id && g.course_id == course_id)
            .cloned())
    }

    async fn list_grades(&self) -> Result<Vec<Grade>> {
        self.record("list_grades")?;
        Ok(self.state.lock().unwrap().grades.values().cloned().collect())
    }

    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
        self.record("list_grades_by_student")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .grades
            .values()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_grades_by_course(&self, course_id: i64) -> Result<Vec<Grade>> {
        self.record("list_grades_by_course")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .grades
            .values()
            .filter(|g| g.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn update_grade(&self, id: i64, value: f64) -> Result<Option<Grade>> {
        self.record("update_grade")?;
        let mut state = self.state.lock().unwrap();
        Ok(state.grades.get_mut(&id).map(|g| {
            g.value = value;
            g.clone()
        }))
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.record("delete_grade")?;
        Ok(self.state.lock().unwrap().grades.remove(&id).is_some())
    }
}
