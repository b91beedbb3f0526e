// src/database.rs
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Creates the connection pool and runs a connectivity check so a bad
/// connection string fails at startup instead of on the first request.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
