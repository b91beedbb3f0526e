use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::auth::password::hash_password;
use crate::dtos::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;

fn map_duplicate_username(err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.code().as_deref() == Some("23505") {
            return AppError::validation("Username already exists");
        }
    }
    AppError::db(err)
}

// GET /users - admin only
pub async fn list_users(
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT id, name, username, role FROM users ORDER BY id")
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(users))
}

// POST /users - admin only
pub async fn create_user(
    State(AppState { db_pool, .. }): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    if payload.role != "admin" && payload.role != "seller" {
        return Err(AppError::validation("Invalid role"));
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Name required"));
    }
    if payload.username.trim().is_empty() {
        return Err(AppError::validation("Username required"));
    }
    if payload.password.len() < 6 {
        return Err(AppError::validation("Password too short"));
    }

    let password_hash = hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, username, password_hash, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, username, role",
    )
    .bind(&payload.name)
    .bind(&payload.username)
    .bind(&password_hash)
    .bind(&payload.role)
    .fetch_one(&db_pool)
    .await
    .map_err(map_duplicate_username)?;

    Ok((StatusCode::CREATED, Json(user)))
}

// GET /users/:id - any authenticated user
pub async fn get_user(
    Path(id): Path<i64>,
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT id, name, username, role FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(user))
}

// PUT /users/:id - any authenticated user, all fields replaced
pub async fn update_user(
    Path(id): Path<i64>,
    State(AppState { db_pool, .. }): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payload.role != "admin" && payload.role != "seller" {
        return Err(AppError::validation("Invalid role"));
    }

    let result = sqlx::query("UPDATE users SET name = $1, username = $2, role = $3 WHERE id = $4")
        .bind(&payload.name)
        .bind(&payload.username)
        .bind(&payload.role)
        .bind(id)
        .execute(&db_pool)
        .await
        .map_err(map_duplicate_username)?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("User not found"));
    }

    Ok(Json(json!({ "status": "updated" })))
}

// DELETE /users/:id - admin only
pub async fn delete_user(
    Path(id): Path<i64>,
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("User not found or already deleted"));
    }

    Ok(StatusCode::NO_CONTENT)
}
