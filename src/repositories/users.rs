use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::{
    entities::{User, UserRole},
    requests::{CreateUserRequest, UpdateUserRequest},
};
use crate::storage::Storage;

#[derive(Clone)]
pub struct UserRepository {
    storage: Arc<dyn Storage>,
}

impl UserRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.storage.get_user_by_id(id).await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.storage.get_user_by_username(username).await
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        self.storage.list_users().await
    }

    /// 按角色筛选（在应用层完成，不依赖数据库端过滤）
    pub async fn find_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        let users = self.storage.list_users().await?;
        Ok(users.into_iter().filter(|u| u.role == role).collect())
    }

    /// 仅当用户存在且角色匹配时返回
    pub async fn find_with_role(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        let user = self.storage.get_user_by_id(id).await?;
        Ok(user.filter(|u| u.role == role))
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        Ok(self.storage.get_user_by_username(username).await?.is_some())
    }

    pub async fn count(&self) -> Result<u64> {
        self.storage.count_users().await
    }

    pub async fn create(&self, user: CreateUserRequest) -> Result<User> {
        self.storage.create_user(user).await
    }

    pub async fn update(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.storage.update_user(id, update).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.storage.delete_user(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[tokio::test]
    async fn test_find_by_role_filters_in_application() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed_user("s1", UserRole::Student);
        storage.seed_user("t1", UserRole::Teacher);
        storage.seed_user("s2", UserRole::Student);
        let repo = UserRepository::new(storage.clone());

        let students = repo.find_by_role(UserRole::Student).await.unwrap();
        assert_eq!(students.len(), 2);
        assert!(students.iter().all(|u| u.role == UserRole::Student));
        assert_eq!(storage.calls("list_users"), 1);
    }

    #[tokio::test]
    async fn test_find_with_role_rejects_other_roles() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("t1", UserRole::Teacher);
        let repo = UserRepository::new(storage);

        assert!(
            repo.find_with_role(teacher.id, UserRole::Teacher)
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_with_role(teacher.id, UserRole::Student)
                .await
                .unwrap()
                .is_none()
        );
    }
}
