use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::{validate_comment, validate_status};
use super::{ApiError, AppState};
use crate::auth::Claims;
use crate::models::{Equipment, EquipmentFilter};

#[derive(Debug, Deserialize)]
pub struct UpdateEquipmentRequest {
    pub status: Option<String>,
    pub comment: Option<String>,
}

/// GET /equipment?status=&area=&search=
pub async fn list_equipment(
    State(state): State<Arc<AppState>>,
    filter: Result<Query<EquipmentFilter>, QueryRejection>,
) -> Result<Json<Vec<Equipment>>, ApiError> {
    let Query(filter) = filter?;
    let rows = state.equipment_service.list(filter).await?;
    Ok(Json(rows))
}

/// GET /equipment/{id}
pub async fn get_equipment(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Equipment>, ApiError> {
    let Path(id) = id?;
    let row = state.equipment_service.get(id).await?;
    Ok(Json(row))
}

/// PUT /equipment/{id}
/// Sets status and comment; the editor is always the authenticated user.
pub async fn update_equipment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateEquipmentRequest>, JsonRejection>,
) -> Result<Json<Equipment>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let status = validate_status(payload.status.as_deref())?;
    let comment = validate_comment(payload.comment.as_deref())?;

    let row = state
        .equipment_service
        .update_status(id, status, comment, &claims.username)
        .await?;

    Ok(Json(row))
}
