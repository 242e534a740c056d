//! Domain service for equipment queries and status updates.

use thiserror::Error;

use crate::models::{Equipment, EquipmentFilter, Status};

#[derive(Debug, Error)]
pub enum EquipmentError {
    #[error("Equipment {0} not found")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for EquipmentError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait EquipmentService: Send + Sync {
    /// Lists equipment matching the filter, ordered by id. No matches is an
    /// empty list.
    async fn list(&self, filter: EquipmentFilter) -> Result<Vec<Equipment>, EquipmentError>;

    /// # Errors
    ///
    /// Returns [`EquipmentError::NotFound`] for an unknown id.
    async fn get(&self, id: i32) -> Result<Equipment, EquipmentError>;

    /// Records a new status and comment, attributed to `updated_by`.
    ///
    /// `updated_by` must come from the authenticated identity.
    ///
    /// # Errors
    ///
    /// Returns [`EquipmentError::NotFound`] for an unknown id.
    async fn update_status(
        &self,
        id: i32,
        status: Status,
        comment: &str,
        updated_by: &str,
    ) -> Result<Equipment, EquipmentError>;
}
