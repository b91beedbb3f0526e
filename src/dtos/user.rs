use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Self-service registration; the role is always `seller`.
#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Admin-side creation with an explicit role.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

// Updates replace every field; partial updates are not supported.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub username: String,
    pub role: String,
}
