use chrono::Duration;
use photomart::{
    models::user::{LoginRequest, Role},
    repositories::user_repository::SqliteUserRepository,
    services::auth_service::{AuthService, AuthServiceError},
    services::token_service::TokenService,
    test_utils::test_helpers,
};
use std::sync::Arc;

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(
        "test-secret-test-secret-test1234".to_string(),
        Duration::hours(24),
    ))
}

#[tokio::test]
async fn test_login_success_issues_token_for_email() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::insert_test_user(&pool, "a@x.com", "secret", Role::Seller)
        .await
        .unwrap();

    let repository = Arc::new(SqliteUserRepository::new(pool));
    let tokens = token_service();
    let service = AuthService::new(repository, tokens.clone());

    let (user, token) = service
        .login(LoginRequest {
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.role, Role::Seller);

    let claims = tokens.decode(&token).unwrap();
    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::insert_test_user(&pool, "a@x.com", "secret", Role::Customer)
        .await
        .unwrap();

    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = AuthService::new(repository, token_service());

    let result = service
        .login(LoginRequest {
            email: "a@x.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let pool = test_helpers::create_test_db().await.unwrap();

    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = AuthService::new(repository, token_service());

    let result = service
        .login(LoginRequest {
            email: "nobody@x.com".to_string(),
            password: "secret".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
}
