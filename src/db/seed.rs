//! Demo users and equipment for a fresh database.

use anyhow::{Context, Result};
use tokio::task;
use tracing::info;

use super::Store;
use crate::auth::password;
use crate::models::{Area, Criticality, NewEquipment, Role, Status};

pub const DEMO_USERS: [(&str, &str, Role); 2] = [
    ("admin", "admin123", Role::Admin),
    ("operator", "operator123", Role::Operator),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: usize,
    pub equipment_created: usize,
}

#[must_use]
pub fn demo_equipment() -> Vec<NewEquipment> {
    let row = |name: &str,
               description: &str,
               area: Area,
               bay: &str,
               status: Status,
               criticality: Criticality| NewEquipment {
        name: name.to_string(),
        description: description.to_string(),
        area,
        bay: bay.to_string(),
        status,
        criticality,
    };

    vec![
        row(
            "ASML PAS 5500 Stepper",
            "i-line wafer stepper for critical layer exposure",
            Area::Lithography,
            "Bay A1",
            Status::Up,
            Criticality::Critical,
        ),
        row(
            "Lam 9400 Poly Etcher",
            "Plasma etch chamber for polysilicon gates",
            Area::Etching,
            "Bay B2",
            Status::Up,
            Criticality::High,
        ),
        row(
            "Applied Centura CVD",
            "Chemical vapor deposition cluster tool",
            Area::Deposition,
            "Bay C1",
            Status::UpWithIssues,
            Criticality::High,
        ),
        row(
            "KLA Overlay Metrology",
            "Overlay and CD measurement system",
            Area::Metrology,
            "Bay D1",
            Status::Maintenance,
            Criticality::Medium,
        ),
        row(
            "Wafer Prober Station",
            "Automated wafer-level electrical test prober",
            Area::Metrology,
            "Bay D2",
            Status::Down,
            Criticality::Critical,
        ),
        row(
            "TEL Coater/Developer Track",
            "Resist coat and develop track",
            Area::Lithography,
            "Bay A2",
            Status::Up,
            Criticality::Low,
        ),
    ]
}

/// Inserts demo users that do not exist yet, and the demo equipment when the
/// equipment table is empty. Safe to run repeatedly.
pub async fn seed_demo_data(store: &Store) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for (username, plaintext, role) in DEMO_USERS {
        if store.get_user_by_username(username).await?.is_some() {
            continue;
        }

        let hash = task::spawn_blocking(move || password::hash(plaintext))
            .await
            .context("Password hashing task panicked")??;

        store.create_user(username, &hash, role).await?;
        report.users_created += 1;
        info!(username, role = %role, "Seeded user");
    }

    if store.count_equipment().await? == 0 {
        for new in demo_equipment() {
            store.insert_equipment(&new).await?;
            report.equipment_created += 1;
        }
        info!(count = report.equipment_created, "Seeded equipment");
    }

    Ok(report)
}
