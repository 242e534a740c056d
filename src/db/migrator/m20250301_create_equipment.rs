use sea_orm_migration::prelude::*;

use crate::models::{Area, Criticality, Status};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Equipment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Equipment::Name).string().not_null())
                    .col(
                        ColumnDef::new(Equipment::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Equipment::Area)
                            .string()
                            .not_null()
                            .check(Expr::col(Equipment::Area).is_in(Area::ALL.map(Area::as_str))),
                    )
                    .col(ColumnDef::new(Equipment::Bay).string().not_null())
                    .col(
                        ColumnDef::new(Equipment::Status)
                            .string()
                            .not_null()
                            .default(Status::Down.as_str())
                            .check(
                                Expr::col(Equipment::Status).is_in(Status::ALL.map(Status::as_str)),
                            ),
                    )
                    .col(
                        ColumnDef::new(Equipment::Criticality)
                            .string()
                            .not_null()
                            .default(Criticality::Medium.as_str())
                            .check(
                                Expr::col(Equipment::Criticality)
                                    .is_in(Criticality::ALL.map(Criticality::as_str)),
                            ),
                    )
                    .col(ColumnDef::new(Equipment::UpdatedBy).string().null())
                    .col(ColumnDef::new(Equipment::LastComment).string().null())
                    .col(ColumnDef::new(Equipment::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Equipment::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_equipment_status")
                    .table(Equipment::Table)
                    .col(Equipment::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Equipment {
    Table,
    Id,
    Name,
    Description,
    Area,
    Bay,
    Status,
    Criticality,
    UpdatedBy,
    LastComment,
    CreatedAt,
    UpdatedAt,
}
