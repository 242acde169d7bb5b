use crate::error::AppError;
use crate::models::product::{CreateProductRequest, Product, SellerProductsRequest};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog_service.create_product(request).await?;

    Ok(Json(product))
}

pub async fn my_products_handler(
    State(state): State<AppState>,
    Json(request): Json<SellerProductsRequest>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.catalog_service.list_by_seller(&request.email).await?;

    Ok(Json(products))
}

pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.catalog_service.list_all().await?;

    Ok(Json(products))
}

pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.catalog_service.delete_product(id).await?;

    Ok(StatusCode::OK)
}
