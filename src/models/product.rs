use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    /// URL or embedded image data.
    pub image: Option<String>,
    /// Soft reference to the seller's user record.
    pub seller_email: String,
    pub created_at: Option<chrono::NaiveDateTime>,
}

// Accepted as-is: an empty title or a negative price is not rejected here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub seller_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SellerProductsRequest {
    #[serde(default)]
    pub email: String,
}
