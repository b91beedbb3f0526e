use axum::{routing::post, Router};

use crate::handlers::auth::{login, register};
use crate::state::AppState;

// The only routes reachable without a token.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}
