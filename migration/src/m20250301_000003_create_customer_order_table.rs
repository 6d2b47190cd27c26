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
                    .table(CustomerOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerOrder::Id))
                    .col(integer(CustomerOrder::UserId))
                    .col(double(CustomerOrder::TotalPrice))
                    .col(string(CustomerOrder::PaymentMethod))
                    .col(string(CustomerOrder::DeliveryMethod))
                    .col(string(CustomerOrder::Status).default("pending"))
                    .col(string_null(CustomerOrder::PaymentReference))
                    .col(string_null(CustomerOrder::TrackingNumber))
                    .col(
                        timestamp_with_time_zone(CustomerOrder::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CustomerOrder::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_order_user_id")
                            .from(CustomerOrder::Table, CustomerOrder::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_order_user_id")
                    .table(CustomerOrder::Table)
                    .col(CustomerOrder::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomerOrder {
    Table,
    Id,
    UserId,
    TotalPrice,
    PaymentMethod,
    DeliveryMethod,
    Status,
    PaymentReference,
    TrackingNumber,
    CreatedAt,
    UpdatedAt,
}
