use crate::models::order::{Order, PlaceOrderRequest};
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::RepositoryError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Persist the order and its item snapshot verbatim. Items are not
    /// checked against the live catalog and no totals are computed.
    pub async fn place_order(&self, request: PlaceOrderRequest) -> Result<Order, OrderServiceError> {
        Ok(self
            .repository
            .create(&request.email, &request.items)
            .await?)
    }

    pub async fn list_by_buyer(&self, email: &str) -> Result<Vec<Order>, OrderServiceError> {
        Ok(self.repository.list_by_buyer(email).await?)
    }
}
