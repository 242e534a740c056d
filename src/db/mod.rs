use crate::models::{Equipment, EquipmentFilter, NewEquipment, Role, Status, User};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

/// RFC 3339 UTC timestamp with microseconds, so string order is time order.
#[must_use]
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn equipment_repo(&self) -> repositories::equipment::EquipmentRepository {
        repositories::equipment::EquipmentRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn get_user_with_password(&self, username: &str) -> Result<Option<(User, String)>> {
        self.user_repo()
            .get_by_username_with_password(username)
            .await
    }

    pub async fn create_user(&self, username: &str, password_hash: &str, role: Role) -> Result<User> {
        self.user_repo().create(username, password_hash, role).await
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    pub async fn list_equipment(&self, filter: &EquipmentFilter) -> Result<Vec<Equipment>> {
        self.equipment_repo().list(filter).await
    }

    pub async fn get_equipment(&self, id: i32) -> Result<Option<Equipment>> {
        self.equipment_repo().get(id).await
    }

    pub async fn update_equipment_status(
        &self,
        id: i32,
        status: Status,
        comment: &str,
        updated_by: &str,
    ) -> Result<Option<Equipment>> {
        self.equipment_repo()
            .update_status(id, status, comment, updated_by)
            .await
    }

    pub async fn insert_equipment(&self, new: &NewEquipment) -> Result<Equipment> {
        self.equipment_repo().insert(new).await
    }

    pub async fn count_equipment(&self) -> Result<u64> {
        self.equipment_repo().count().await
    }
}
