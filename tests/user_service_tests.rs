use photomart::{
    models::user::{RegisterRequest, Role, UpdateProfileRequest},
    repositories::user_repository::SqliteUserRepository,
    services::user_service::{UserService, UserServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn register_request(email: &str, password: &str, role: &str) -> RegisterRequest {
    RegisterRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        role: Some(role.to_string()),
    }
}

async fn service() -> UserService {
    let pool = test_helpers::create_test_db().await.unwrap();
    UserService::new(Arc::new(SqliteUserRepository::new(pool)))
}

#[tokio::test]
async fn test_register_success_hashes_password() {
    let service = service().await;

    let user = service
        .register(register_request("test@example.com", "password123", "SELLER"))
        .await
        .unwrap();

    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.role, Role::Seller);
    assert_ne!(user.password_hash, "password123");
    assert!(service.verify_password("password123", &user.password_hash));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let service = service().await;

    service
        .register(register_request("duplicate@example.com", "password123", "SELLER"))
        .await
        .unwrap();

    let result = service
        .register(register_request("duplicate@example.com", "password456", "CUSTOMER"))
        .await;

    assert!(matches!(result, Err(UserServiceError::EmailTaken)));
}

#[tokio::test]
async fn test_register_unknown_role() {
    let service = service().await;

    let result = service
        .register(register_request("test@example.com", "password123", "ADMIN"))
        .await;

    assert!(matches!(result, Err(UserServiceError::InvalidRole)));
}

#[tokio::test]
async fn test_register_missing_role() {
    let service = service().await;

    let result = service
        .register(RegisterRequest {
            email: Some("test@example.com".to_string()),
            password: Some("password123".to_string()),
            role: None,
        })
        .await;

    assert!(matches!(result, Err(UserServiceError::MissingFields)));
}

#[tokio::test]
async fn test_get_profile_unknown_email() {
    let service = service().await;

    let result = service.get_profile("nobody@example.com").await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound)));
}

#[tokio::test]
async fn test_update_profile_only_touches_profile_fields() {
    let service = service().await;

    let created = service
        .register(register_request("test@example.com", "password123", "CUSTOMER"))
        .await
        .unwrap();

    let updated = service
        .update_profile(UpdateProfileRequest {
            email: "test@example.com".to_string(),
            full_name: Some("Ada Lovelace".to_string()),
            phone_number: Some("555-0100".to_string()),
            address: Some("12 Analytical St".to_string()),
            profile_image: Some("https://example.com/ada.png".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "test@example.com");
    assert_eq!(updated.role, Role::Customer);
    assert_eq!(updated.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(updated.phone_number.as_deref(), Some("555-0100"));
    assert_eq!(updated.address.as_deref(), Some("12 Analytical St"));
    assert_eq!(
        updated.profile_image.as_deref(),
        Some("https://example.com/ada.png")
    );
    // Credentials are untouched by a profile update
    assert!(service.verify_password("password123", &updated.password_hash));
}

#[tokio::test]
async fn test_update_profile_unknown_email() {
    let service = service().await;

    let result = service
        .update_profile(UpdateProfileRequest {
            email: "nobody@example.com".to_string(),
            full_name: Some("Nobody".to_string()),
            phone_number: None,
            address: None,
            profile_image: None,
        })
        .await;

    assert!(matches!(result, Err(UserServiceError::UserNotFound)));
}
