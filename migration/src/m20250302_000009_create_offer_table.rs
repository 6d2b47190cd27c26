use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_product_table::Product;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(integer(Offer::ProductId))
                    .col(double(Offer::Discount))
                    .col(text(Offer::Description))
                    .col(timestamp_with_time_zone(Offer::StartDate))
                    .col(timestamp_with_time_zone(Offer::EndDate))
                    .col(
                        timestamp_with_time_zone(Offer::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_product_id")
                            .from(Offer::Table, Offer::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Offer {
    Table,
    Id,
    ProductId,
    Discount,
    Description,
    StartDate,
    EndDate,
    CreatedAt,
}
