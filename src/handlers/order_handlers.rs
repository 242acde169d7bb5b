use crate::error::AppError;
use crate::models::order::{Order, PlaceOrderRequest};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct OrdersQuery {
    pub email: String,
}

pub async fn place_order_handler(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<Json<Order>, AppError> {
    let order = state.order_service.place_order(request).await?;

    Ok(Json(order))
}

pub async fn list_orders_handler(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.order_service.list_by_buyer(&query.email).await?;

    Ok(Json(orders))
}
