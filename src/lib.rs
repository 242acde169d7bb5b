pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::repositories::{SqliteOrderRepository, SqliteProductRepository, SqliteUserRepository};
use crate::services::{AuthService, CatalogService, OrderService, TokenService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub catalog_service: Arc<CatalogService>,
    pub order_service: Arc<OrderService>,
    pub pool: sqlx::SqlitePool,
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool, auth: &AuthConfig) -> Self {
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let product_repository = Arc::new(SqliteProductRepository::new(pool.clone()));
        let order_repository = Arc::new(SqliteOrderRepository::new(pool.clone()));

        let token_service = Arc::new(TokenService::new(auth.jwt_secret.clone(), auth.token_ttl));
        let user_service = Arc::new(UserService::new(user_repository.clone()));
        let auth_service = Arc::new(AuthService::new(user_repository, token_service.clone()));
        let catalog_service = Arc::new(CatalogService::new(product_repository));
        let order_service = Arc::new(OrderService::new(order_repository));

        Self {
            user_service,
            auth_service,
            token_service,
            catalog_service,
            order_service,
            pool,
        }
    }
}
