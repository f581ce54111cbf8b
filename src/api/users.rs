//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User},
};

use super::ResultEnvelope;

/// List all users
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ResultEnvelope<Vec<User>>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(ResultEnvelope::new(users)))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ResultEnvelope<User>>> {
    let user = state.services.users.get_by_id(id).await?;
    Ok(Json(ResultEnvelope::new(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "CPF already registered")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(user): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<ResultEnvelope<User>>)> {
    let created = state.services.users.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(ResultEnvelope::new(created))))
}

/// Partially update an existing user
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found"),
        (status = 409, description = "CPF already registered")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(user): Json<UpdateUser>,
) -> AppResult<Json<ResultEnvelope<User>>> {
    let updated = state.services.users.update_user(id, user).await?;
    Ok(Json(ResultEnvelope::new(updated)))
}

/// Deactivate a user
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deactivated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.users.deactivate_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
