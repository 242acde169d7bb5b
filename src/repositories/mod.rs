pub mod order_repository;
pub mod product_repository;
pub mod user_repository;

pub use order_repository::{OrderRepository, SqliteOrderRepository};
pub use product_repository::{ProductRepository, SqliteProductRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
