use crate::models::product::{CreateProductRequest, Product};
use crate::repositories::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

const PRODUCT_COLUMNS: &str =
    "id, title, description, price, category, image, seller_email, created_at";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &CreateProductRequest) -> RepositoryResult<Product>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;
    async fn list_by_seller(&self, seller_email: &str) -> RepositoryResult<Vec<Product>>;
    async fn list_all(&self) -> RepositoryResult<Vec<Product>>;
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: &CreateProductRequest) -> RepositoryResult<Product> {
        let result = sqlx::query(
            "INSERT INTO products (title, description, price, category, image, seller_email) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.image)
        .bind(&product.seller_email)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list_by_seller(&self, seller_email: &str) -> RepositoryResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE seller_email = ? ORDER BY id"
        ))
        .bind(seller_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    // No existence check: deleting an id that is not there is a no-op.
    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
