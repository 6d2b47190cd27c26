use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRequest::Id))
                    .col(integer(MaintenanceRequest::UserId))
                    .col(string(MaintenanceRequest::EquipmentId))
                    .col(text(MaintenanceRequest::Issue))
                    .col(string(MaintenanceRequest::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(MaintenanceRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_request_user_id")
                            .from(MaintenanceRequest::Table, MaintenanceRequest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRequest {
    Table,
    Id,
    UserId,
    EquipmentId,
    Issue,
    Status,
    CreatedAt,
}
