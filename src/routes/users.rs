use axum::{
    middleware,
    routing::{delete, get},
    Router,
};

use crate::handlers::user::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::auth::{require_admin, require_auth};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    // Listing, creating and deleting users is admin territory; reading and
    // updating a single user only needs a valid token.
    let admin = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", delete(delete_user))
        .route_layer(middleware::from_fn(require_admin));

    let general = Router::new().route("/users/{id}", get(get_user).put(update_user));

    admin
        .merge(general)
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
