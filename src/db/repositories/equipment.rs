use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, Unchanged,
};
use tracing::debug;

use crate::entities::{equipment, prelude::*};
use crate::models::{Equipment as EquipmentRow, EquipmentFilter, NewEquipment, Status};

/// The single row-to-domain mapping used by every read and write path.
impl From<equipment::Model> for EquipmentRow {
    fn from(m: equipment::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            area: m.area,
            bay: m.bay,
            status: m.status,
            criticality: m.criticality,
            updated_by: m.updated_by,
            last_comment: m.last_comment,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub struct EquipmentRepository {
    conn: DatabaseConnection,
}

impl EquipmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Lists equipment matching every given constraint, ordered by id.
    ///
    /// Status and area are matched in SQL. The text search runs on the
    /// fetched rows because `SQLite`'s `LOWER()` only folds ASCII.
    pub async fn list(&self, filter: &EquipmentFilter) -> Result<Vec<EquipmentRow>> {
        let mut query = Equipment::find();

        if let Some(status) = filter.status.as_deref() {
            query = query.filter(equipment::Column::Status.eq(status));
        }

        if let Some(area) = filter.area.as_deref() {
            query = query.filter(equipment::Column::Area.eq(area));
        }

        let rows = query
            .order_by_asc(equipment::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list equipment")?;

        let needle = filter.search.as_deref().map(str::to_lowercase);
        let rows: Vec<EquipmentRow> = rows
            .into_iter()
            .filter(|row| {
                needle
                    .as_deref()
                    .is_none_or(|n| matches_search(&row.name, &row.description, n))
            })
            .map(EquipmentRow::from)
            .collect();

        debug!(count = rows.len(), ?filter, "Listed equipment");
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Option<EquipmentRow>> {
        let row = Equipment::find_by_id(id)
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to query equipment {id}"))?;

        Ok(row.map(EquipmentRow::from))
    }

    /// Sets status, comment and editor on one row in a single `UPDATE`.
    /// Returns `None` when no row has this id.
    pub async fn update_status(
        &self,
        id: i32,
        status: Status,
        comment: &str,
        updated_by: &str,
    ) -> Result<Option<EquipmentRow>> {
        let active = equipment::ActiveModel {
            id: Unchanged(id),
            status: Set(status),
            last_comment: Set(Some(comment.to_string())),
            updated_by: Set(Some(updated_by.to_string())),
            updated_at: Set(crate::db::timestamp_now()),
            ..Default::default()
        };

        match active.update(&self.conn).await {
            Ok(model) => Ok(Some(EquipmentRow::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context(format!("Failed to update equipment {id}"))),
        }
    }

    pub async fn insert(&self, new: &NewEquipment) -> Result<EquipmentRow> {
        let now = crate::db::timestamp_now();

        let active = equipment::ActiveModel {
            name: Set(new.name.clone()),
            description: Set(new.description.clone()),
            area: Set(new.area),
            bay: Set(new.bay.clone()),
            status: Set(new.status),
            criticality: Set(new.criticality),
            updated_by: Set(None),
            last_comment: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = Equipment::insert(active)
            .exec_with_returning(&self.conn)
            .await
            .with_context(|| format!("Failed to insert equipment {}", new.name))?;

        Ok(EquipmentRow::from(model))
    }

    pub async fn count(&self) -> Result<u64> {
        Equipment::find()
            .count(&self.conn)
            .await
            .context("Failed to count equipment")
    }
}

/// Case-insensitive substring match on name or description. `needle` must
/// already be lowercased.
fn matches_search(name: &str, description: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle) || description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_folds_case_beyond_ascii() {
        assert!(matches_search("Überprüfung Station", "", "über"));
        assert!(matches_search("Etcher", "ÄTZANLAGE", &"ÄTZ".to_lowercase()));
        assert!(matches_search("Wafer Prober", "", "prober"));
        assert!(!matches_search("Wafer Prober", "", "%"));
    }
}
