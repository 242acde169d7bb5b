use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One order line, snapshotted from the product at purchase time. The wire
/// name of `product_id` is `id`, matching what the storefront sends.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "id", default)]
    pub product_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub email: String,
    #[sqlx(skip)]
    pub items: Vec<OrderItem>,
    pub created_at: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}
