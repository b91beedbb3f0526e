// src/state.rs
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state: the connection pool and the token signing
/// secret, both read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: Arc<String>,
}

impl AppState {
    pub fn new(db_pool: PgPool, jwt_secret: String) -> Self {
        Self {
            db_pool,
            jwt_secret: Arc::new(jwt_secret),
        }
    }
}
