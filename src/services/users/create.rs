use tracing::{info, warn};

use super::UserService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::users::{entities::UserRole, requests::CreateUserRequest, responses::UserDto};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_name, validate_password, validate_username};

pub async fn create_user(
    service: &UserService,
    expected_role: Option<UserRole>,
    mut user_data: CreateUserRequest,
) -> Result<UserDto> {
    // 角色必须与目标子类型一致；通用接口只允许学生和教师
    let role_ok = match expected_role {
        Some(role) => user_data.role == role,
        None => UserRole::creatable_roles()
            .iter()
            .any(|role| **role == user_data.role),
    };
    if !role_ok {
        warn!(
            "Rejected user creation with role '{}' (expected {:?})",
            user_data.role, expected_role
        );
        return Err(SchoolSystemError::invalid_role(match expected_role {
            Some(role) => format!("Invalid user role '{}', expected '{role}'", user_data.role),
            None => format!("Invalid user role '{}'", user_data.role),
        }));
    }

    // 验证用户名
    validate_username(&user_data.username).map_err(SchoolSystemError::validation)?;
    validate_name(&user_data.first_name, "First name").map_err(SchoolSystemError::validation)?;
    validate_name(&user_data.last_name, "Last name").map_err(SchoolSystemError::validation)?;
    validate_password(&user_data.password).map_err(SchoolSystemError::validation)?;

    if service.users.username_exists(&user_data.username).await? {
        info!("Username '{}' already exists", user_data.username);
        return Err(SchoolSystemError::duplicate_username(format!(
            "Username '{}' already exists",
            user_data.username
        )));
    }

    user_data.password = hash_password(&user_data.password)?;
    user_data.first_name = user_data.first_name.trim().to_string();
    user_data.last_name = user_data.last_name.trim().to_string();

    let user = service.users.create(user_data).await?;
    info!("Created {} '{}' with ID {}", user.role, user.username, user.id);

    Ok(UserDto::from(user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::Storage;
    use crate::storage::memory::MemoryStorage;

    fn request(username: &str, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            password: "pw".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_create_teacher_returns_public_projection() {
        let storage = Arc::new(MemoryStorage::new());
        let service = UserService::new(storage.clone());

        let dto = service
            .create_user(Some(UserRole::Teacher), request("ghopper", UserRole::Teacher))
            .await
            .unwrap();

        assert_eq!(dto.role, UserRole::Teacher);
        assert_eq!(dto.full_name, "Grace Hopper");

        // 存储的是哈希而不是明文
        let stored = storage.get_user_by_id(dto.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw");
        assert!(crate::utils::password::verify_password("pw", &stored.password_hash));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected_without_write() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed_user("taken", UserRole::Student);
        let service = UserService::new(storage.clone());

        let err = service
            .create_user(Some(UserRole::Student), request("taken", UserRole::Student))
            .await
            .unwrap_err();

        assert!(matches!(err, SchoolSystemError::DuplicateUsername(_)));
        assert_eq!(storage.calls("create_user"), 0);
    }

    #[tokio::test]
    async fn test_role_must_match_target_subtype() {
        let storage = Arc::new(MemoryStorage::new());
        let service = UserService::new(storage.clone());

        let err = service
            .create_user(Some(UserRole::Teacher), request("alice", UserRole::Student))
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolSystemError::InvalidRole(_)));

        // 通用接口不允许创建管理员
        let err = service
            .create_user(None, request("boss", UserRole::Admin))
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolSystemError::InvalidRole(_)));

        assert_eq!(storage.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_names_rejected() {
        let storage = Arc::new(MemoryStorage::new());
        let service = UserService::new(storage);

        let mut req = request("blank", UserRole::Student);
        req.first_name = "  ".to_string();
        let err = service.create_user(None, req).await.unwrap_err();
        assert!(matches!(err, SchoolSystemError::Validation(_)));
    }
}
