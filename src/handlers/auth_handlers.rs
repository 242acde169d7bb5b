use crate::error::AppError;
use crate::models::user::{LoginRequest, LoginResponse, RegisterRequest};
use crate::AppState;
use axum::{extract::State, response::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (user, token) = state.auth_service.login(request).await?;

    Ok(Json(LoginResponse {
        email: user.email,
        role: user.role,
        token,
    }))
}

pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.register(request).await?;

    Ok(Json(MessageResponse {
        message: "User registered successfully".to_string(),
    }))
}
