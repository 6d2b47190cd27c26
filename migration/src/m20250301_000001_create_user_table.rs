use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FullName))
                    .col(string_uniq(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::Phone))
                    .col(string(User::PasswordHash))
                    .col(string(User::Role).default("customer"))
                    .col(string_null(User::Address))
                    .col(string(User::ProfilePicture).default("default.jpg"))
                    .col(string_null(User::CompanyName))
                    .col(string_null(User::CompanyLogo))
                    .col(string_null(User::CompanyAddress))
                    .col(string_null(User::Website))
                    .col(integer(User::Points).default(0))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FullName,
    Username,
    Email,
    Phone,
    PasswordHash,
    Role,
    Address,
    ProfilePicture,
    CompanyName,
    CompanyLogo,
    CompanyAddress,
    Website,
    Points,
    CreatedAt,
    UpdatedAt,
}
