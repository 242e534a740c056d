use axum::{
    Extension, Json,
    extract::{Request, State, rejection::JsonRejection},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use super::observability::RequestSpan;
use super::validation::validate_credentials;
use super::{ApiError, AppState, IdentityDto};
use crate::auth::{Claims, authorize};
use crate::services::LoginResult;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Middleware
// ============================================================================

/// Rejects the request unless it carries `Authorization: Bearer <token>` with
/// a valid token. On success the token's [`Claims`] are available to handlers
/// as an `Extension`.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = authorize(header, &state.tokens).map_err(|_| ApiError::Unauthorized)?;

    if let Some(RequestSpan(span)) = request.extensions().get::<RequestSpan>() {
        span.record("user", claims.username.as_str());
    }
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /auth/login
/// Authenticate with username and password, returns a bearer token
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResult>, ApiError> {
    let Json(payload) = payload?;
    let (username, password) =
        validate_credentials(payload.username.as_deref(), payload.password.as_deref())?;

    let result = state.auth_service.login(username, password).await?;
    Ok(Json(result))
}

/// GET /auth/me
pub async fn current_user(Extension(claims): Extension<Claims>) -> Json<IdentityDto> {
    Json(IdentityDto::from(claims))
}
