use crate::models::product::{CreateProductRequest, Product};
use crate::repositories::product_repository::ProductRepository;
use crate::repositories::RepositoryError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<Product, CatalogServiceError> {
        Ok(self.repository.create(&request).await?)
    }

    pub async fn list_by_seller(
        &self,
        seller_email: &str,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self.repository.list_by_seller(seller_email).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self.repository.list_all().await?)
    }

    /// Deleting an id that does not exist is a silent success.
    pub async fn delete_product(&self, id: i64) -> Result<(), CatalogServiceError> {
        Ok(self.repository.delete(id).await?)
    }
}
