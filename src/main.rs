// src/main.rs
mod auth;
mod config;
mod database;
mod dtos;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod state;

use axum::{routing::get, Router};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::fmt::init as tracing_init;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Startup configuration is all-or-nothing: a missing DATABASE_URL or
    // JWT_SECRET aborts the process before it can serve a single request.
    let config = config::Config::from_env()
        .unwrap_or_else(|e| panic!("Configuration error: {e}"));

    let db_pool = database::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to the database");
    tracing::info!("Connected to the database");

    let app_state = state::AppState::new(db_pool, config.jwt_secret);

    // Build application under the versioned base path
    let api = routes::create_router(app_state.clone())
        .route("/health", get(health_check));

    let app = Router::new()
        .nest("/api/v1", api)
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = SocketAddr::from((config.host, config.port));
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

async fn health_check() -> &'static str {
    "OK"
}
