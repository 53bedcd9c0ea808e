use tracing::{debug, info};

use super::{UserService, not_found_for};
use crate::errors::{Result, SchoolSystemError};
use crate::models::users::{requests::UpdateUserRequest, responses::UserDto};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_name, validate_password};

// 空字符串视为未提供
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    update_data: UpdateUserRequest,
) -> Result<UserDto> {
    let existing = service
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| not_found_for(None, user_id))?;

    let first_name = non_empty(update_data.first_name);
    let last_name = non_empty(update_data.last_name);
    let password = update_data.password.filter(|p| !p.is_empty());

    if first_name.is_none() && last_name.is_none() && password.is_none() {
        debug!("No changes supplied for user {}", user_id);
        return Ok(UserDto::from(existing));
    }

    if let Some(name) = &first_name {
        validate_name(name, "First name").map_err(SchoolSystemError::validation)?;
    }
    if let Some(name) = &last_name {
        validate_name(name, "Last name").map_err(SchoolSystemError::validation)?;
    }
    let password = match password {
        Some(p) => {
            validate_password(&p).map_err(SchoolSystemError::validation)?;
            Some(hash_password(&p)?)
        }
        None => None,
    };

    let changes = UpdateUserRequest {
        first_name,
        last_name,
        password,
    };

    let user = service
        .users
        .update(user_id, changes)
        .await?
        .ok_or_else(|| not_found_for(None, user_id))?;

    info!("Updated user {}", user_id);
    Ok(UserDto::from(user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;

    #[tokio::test]
    async fn test_only_non_empty_fields_are_applied() {
        let storage = Arc::new(MemoryStorage::new());
        let user = storage.seed_user("stud", UserRole::Student);
        let service = UserService::new(storage.clone());

        let dto = service
            .update_user(
                user.id,
                UpdateUserRequest {
                    first_name: Some("Linus".into()),
                    last_name: Some(String::new()),
                    password: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(dto.first_name, "Linus");
        assert_eq!(dto.last_name, user.last_name);
        assert_eq!(dto.role, UserRole::Student);
    }

    #[tokio::test]
    async fn test_empty_update_does_not_write() {
        let storage = Arc::new(MemoryStorage::new());
        let user = storage.seed_user("stud", UserRole::Student);
        let service = UserService::new(storage.clone());

        service
            .update_user(user.id, UpdateUserRequest::default())
            .await
            .unwrap();
        assert_eq!(storage.calls("update_user"), 0);
    }

    #[tokio::test]
    async fn test_password_is_rehashed() {
        let storage = Arc::new(MemoryStorage::new());
        let user = storage.seed_user("stud", UserRole::Student);
        let service = UserService::new(storage.clone());

        service
            .update_user(
                user.id,
                UpdateUserRequest {
                    password: Some("new-pass".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = storage.get_user_by_id(user.id).await.unwrap().unwrap();
        assert!(crate::utils::password::verify_password("new-pass", &stored.password_hash));
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let storage = Arc::new(MemoryStorage::new());
        let service = UserService::new(storage);

        let err = service
            .update_user(9, UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolSystemError::NotFound(_)));
    }
}
