use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handlers::product::{
    create_product, delete_product, get_product, get_products, update_product,
};
use crate::middleware::auth::{require_admin, require_auth};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    // Reads are open to any authenticated user; writes require admin.
    let admin = Router::new()
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route_layer(middleware::from_fn(require_admin));

    let general = Router::new()
        .route("/products", get(get_products))
        .route("/products/{id}", get(get_product));

    admin
        .merge(general)
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
