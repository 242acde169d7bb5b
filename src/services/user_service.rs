use crate::models::user::{RegisterRequest, Role, UpdateProfileRequest, User};
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString},
    Argon2, PasswordVerifier,
};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Email, password, and role are required")]
    MissingFields,
    #[error("Invalid role specified")]
    InvalidRole,
    #[error("User already exists")]
    EmailTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Password hashing failed: {0}")]
    HashingError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<User, UserServiceError> {
        let (email, password, role) = match (request.email, request.password, request.role) {
            (Some(email), Some(password), Some(role)) => (email, password, role),
            _ => return Err(UserServiceError::MissingFields),
        };

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(UserServiceError::EmailTaken);
        }

        let role = Role::parse(&role).ok_or(UserServiceError::InvalidRole)?;

        let password_hash = self.hash_password(&password)?;

        // A concurrent registration can still slip past the lookup above;
        // the unique constraint reports it as the same conflict.
        match self
            .repository
            .create_user(&email, &password_hash, role)
            .await
        {
            Ok(user) => Ok(user),
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::EmailTaken),
            Err(e) => Err(UserServiceError::Repository(e)),
        }
    }

    pub async fn get_profile(&self, email: &str) -> Result<User, UserServiceError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }

    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<User, UserServiceError> {
        match self.repository.update_profile(&request).await {
            Ok(user) => Ok(user),
            Err(RepositoryError::NotFound) => Err(UserServiceError::UserNotFound),
            Err(e) => Err(UserServiceError::Repository(e)),
        }
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, UserServiceError> {
        Ok(self.repository.find_by_email(email).await?)
    }

    fn hash_password(&self, password: &str) -> Result<String, UserServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserServiceError::HashingError(e.to_string()))
    }

    pub fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(password_hash) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            false
        }
    }
}
