use crate::error::AppError;
use crate::models::user::{UpdateProfileRequest, User};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub email: String,
}

pub async fn get_profile_handler(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.get_profile(&query.email).await?;

    Ok(Json(user))
}

pub async fn update_profile_handler(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.update_profile(request).await?;

    Ok(Json(user))
}
