use crate::models::order::{Order, OrderItem};
use crate::repositories::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, email: &str, items: &[OrderItem]) -> RepositoryResult<Order>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Order>>;
    async fn list_by_buyer(&self, email: &str) -> RepositoryResult<Vec<Order>>;
}

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn items_for(&self, order_id: i64) -> RepositoryResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT product_id, title, price, quantity FROM order_items \
             WHERE order_id = ? ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    // The order row and its item snapshot are written in one transaction, so
    // an order is never visible without its items.
    async fn create(&self, email: &str, items: &[OrderItem]) -> RepositoryResult<Order> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO orders (email) VALUES (?)")
            .bind(email)
            .execute(&mut *tx)
            .await?;
        let order_id = result.last_insert_rowid();

        for item in items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, title, price, quantity) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(&item.title)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_by_id(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, email, created_at FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match order {
            Some(mut order) => {
                order.items = self.items_for(order.id).await?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn list_by_buyer(&self, email: &str) -> RepositoryResult<Vec<Order>> {
        let mut orders = sqlx::query_as::<_, Order>(
            "SELECT id, email, created_at FROM orders WHERE email = ? ORDER BY id",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        for order in &mut orders {
            order.items = self.items_for(order.id).await?;
        }

        Ok(orders)
    }
}
