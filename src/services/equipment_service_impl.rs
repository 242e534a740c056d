//! `SeaORM` implementation of the `EquipmentService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::{Equipment, EquipmentFilter, Status};
use crate::services::equipment_service::{EquipmentError, EquipmentService};

pub struct SeaOrmEquipmentService {
    store: Store,
}

impl SeaOrmEquipmentService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EquipmentService for SeaOrmEquipmentService {
    async fn list(&self, filter: EquipmentFilter) -> Result<Vec<Equipment>, EquipmentError> {
        let filter = filter.normalized();
        Ok(self.store.list_equipment(&filter).await?)
    }

    async fn get(&self, id: i32) -> Result<Equipment, EquipmentError> {
        self.store
            .get_equipment(id)
            .await?
            .ok_or(EquipmentError::NotFound(id))
    }

    async fn update_status(
        &self,
        id: i32,
        status: Status,
        comment: &str,
        updated_by: &str,
    ) -> Result<Equipment, EquipmentError> {
        let updated = self
            .store
            .update_equipment_status(id, status, comment, updated_by)
            .await?
            .ok_or(EquipmentError::NotFound(id))?;

        info!(id, status = %status, updated_by, "Equipment status updated");
        metrics::counter!("equipment_updates_total", "status" => status.as_str()).increment(1);

        Ok(updated)
    }
}
