//! Create restaurants table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurants::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Restaurants::Address).string_len(255).null())
                    .col(
                        ColumnDef::new(Restaurants::TotalTables)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    // Free-form "HH:MM"; bad values fall back to default hours at read time
                    .col(
                        ColumnDef::new(Restaurants::OpenTime)
                            .string_len(8)
                            .not_null()
                            .default("11:00"),
                    )
                    .col(
                        ColumnDef::new(Restaurants::CloseTime)
                            .string_len(8)
                            .not_null()
                            .default("22:00"),
                    )
                    .col(
                        ColumnDef::new(Restaurants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Restaurants {
    Table,
    Id,
    Name,
    Address,
    TotalTables,
    OpenTime,
    CloseTime,
    CreatedAt,
}
