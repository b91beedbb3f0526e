use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::jwt::{verify_token, TokenError};
use crate::error::AppError;
use crate::state::AppState;

/// Verified identity attached to the request by `require_auth`. Downstream
/// authorization reads this extension instead of re-parsing the token.
#[derive(Clone)]
pub struct AuthContext {
    pub user_id: i64,
    pub role: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    // Expect "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid token format"))?;

    let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
        AppError::unauthorized(match e {
            TokenError::InvalidSignature => "Invalid token signature",
            TokenError::Expired => "Token expired",
            TokenError::Malformed => "Invalid token",
        })
    })?;

    req.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Must be layered inside `require_auth` so the claims are already attached.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let auth = req
        .extensions()
        .get::<AuthContext>()
        .ok_or_else(|| AppError::unauthorized("Missing authentication context"))?;

    if auth.role != "admin" {
        return Err(AppError::forbidden("Admin role required"));
    }

    Ok(next.run(req).await)
}
