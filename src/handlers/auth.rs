use axum::{extract::State, http::StatusCode, Json};

use crate::auth::jwt::sign_token;
use crate::auth::password::{hash_password, verify_password};
use crate::dtos::user::{LoginRequest, LoginResponse, RegisterUserRequest};
use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub async fn login(
    State(AppState { db_pool, jwt_secret }): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if payload.username.trim().is_empty() {
        return Err(AppError::validation("Username required"));
    }
    if payload.password.is_empty() {
        return Err(AppError::validation("Password required"));
    }

    let row = sqlx::query_as::<_, UserAuthRow>(
        "SELECT id, name, username, password_hash, role FROM users WHERE username = $1",
    )
    .bind(&payload.username)
    .fetch_optional(&db_pool)
    .await?
    .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    if !verify_password(&payload.password, &row.password_hash) {
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    let token = sign_token(row.id, &row.role, &jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        user: User {
            id: row.id,
            name: row.name,
            username: row.username,
            role: row.role,
        },
    }))
}

pub async fn register(
    State(AppState { db_pool, .. }): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
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

    // Self-registered accounts always start as sellers.
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, username, password_hash, role)
         VALUES ($1, $2, $3, 'seller')
         RETURNING id, name, username, role",
    )
    .bind(&payload.name)
    .bind(&payload.username)
    .bind(&password_hash)
    .fetch_one(&db_pool)
    .await
    .map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            if db_err.code().as_deref() == Some("23505") {
                return AppError::validation("Username already exists");
            }
        }
        AppError::db(e)
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[derive(sqlx::FromRow)]
struct UserAuthRow {
    id: i64,
    name: String,
    username: String,
    password_hash: String,
    role: String,
}
