//! User API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use shared::models::{User, UserCreate};

use crate::api::extract::{ApiJson, ApiPath};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /users/
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.registry.list_users().await?))
}

/// GET /users/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<User>> {
    Ok(Json(state.registry.get_user(id).await?))
}

/// POST /users/
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.registry.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
