use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(text(Product::Description))
                    .col(double(Product::Price))
                    .col(integer(Product::Stock).default(0))
                    .col(string(Product::Category))
                    .col(string(Product::Brand))
                    .col(json(Product::Images))
                    .col(json(Product::Specifications))
                    .col(boolean(Product::IsFeatured).default(false))
                    .col(integer(Product::TrendingScore).default(0))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_category_brand")
                    .table(Product::Table)
                    .col(Product::Category)
                    .col(Product::Brand)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Description,
    Price,
    Stock,
    Category,
    Brand,
    Images,
    Specifications,
    IsFeatured,
    TrendingScore,
    CreatedAt,
    UpdatedAt,
}
