use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, HealthDto};

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthDto>, ApiError> {
    state
        .store
        .ping()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(format!("database ping failed: {e}")))?;

    Ok(Json(HealthDto {
        status: "ok",
        database: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
