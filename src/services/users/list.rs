use super::{UserService, not_found_for};
use crate::errors::Result;
use crate::models::users::{entities::UserRole, responses::UserDto};

pub async fn list_users(service: &UserService, role: Option<UserRole>) -> Result<Vec<UserDto>> {
    let users = match role {
        Some(role) => service.users.find_by_role(role).await?,
        None => service.users.find_all().await?,
    };
    Ok(users.into_iter().map(UserDto::from).collect())
}

pub async fn get_user(service: &UserService, user_id: i64) -> Result<UserDto> {
    service
        .users
        .find_by_id(user_id)
        .await?
        .map(UserDto::from)
        .ok_or_else(|| not_found_for(None, user_id))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[tokio::test]
    async fn test_list_by_role_projects_full_name() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed_user("t1", UserRole::Teacher);
        storage.seed_user("s1", UserRole::Student);
        storage.seed_user("a1", UserRole::Admin);
        let service = UserService::new(storage);

        let teachers = service.list_teachers().await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].full_name, "t1-first t1-last");

        assert_eq!(service.list_students().await.unwrap().len(), 1);
        assert_eq!(service.list_admins().await.unwrap().len(), 1);
        assert_eq!(service.list_users(None).await.unwrap().len(), 3);
    }
}
