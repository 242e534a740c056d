//! Seed command handler

use crate::config::Config;
use crate::db::Store;
use crate::db::seed::{DEMO_USERS, seed_demo_data};

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let report = seed_demo_data(&store).await?;

    println!(
        "✓ Seed complete: {} user(s), {} equipment row(s) created",
        report.users_created, report.equipment_created
    );

    if report.users_created > 0 {
        println!();
        println!("Demo accounts:");
        for (username, password, role) in DEMO_USERS {
            println!("  {username:<10} {password:<12} ({role})");
        }
    }

    Ok(())
}
