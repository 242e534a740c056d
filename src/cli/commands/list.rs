//! List equipment command handler

use crate::config::Config;
use crate::db::Store;
use crate::models::{EquipmentFilter, Status};

pub async fn cmd_list_equipment(config: &Config, filter: EquipmentFilter) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let rows = store.list_equipment(&filter.normalized()).await?;

    if rows.is_empty() {
        println!("No equipment matches.");
        println!();
        println!("Populate a fresh database with: fabstatus seed");
        return Ok(());
    }

    println!("Equipment ({} total)", rows.len());
    println!("{:-<78}", "");

    for row in rows {
        let indicator = match row.status {
            Status::Up => "🟢",
            Status::UpWithIssues => "🟡",
            Status::Maintenance => "🔧",
            Status::Down => "🔴",
        };

        println!("{indicator} [{}] {} ({})", row.id, row.name, row.status);
        println!(
            "  Area: {} | Bay: {} | Criticality: {}",
            row.area, row.bay, row.criticality
        );
        if let Some(comment) = row.last_comment.as_deref().filter(|c| !c.is_empty()) {
            println!(
                "  Last comment: {comment} ({})",
                row.updated_by.as_deref().unwrap_or("unknown")
            );
        }
    }

    Ok(())
}
