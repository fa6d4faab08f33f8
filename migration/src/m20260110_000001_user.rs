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
                    .col(string_len_uniq(User::OpenId, 64))
                    .col(text_null(User::Name))
                    .col(string_len_null(User::Email, 320))
                    .col(string_len_null(User::LoginMethod, 64))
                    .col(string_len(User::Role, 8).default("user"))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .col(timestamp(User::LastSignedIn))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    OpenId,
    Name,
    Email,
    LoginMethod,
    Role,
    CreatedAt,
    UpdatedAt,
    LastSignedIn,
}
