use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeeCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(FeeCategory::Id))
                    .col(string_len(FeeCategory::Name, 255))
                    .col(text_null(FeeCategory::Description))
                    .col(boolean(FeeCategory::IsActive).default(true))
                    .col(timestamp(FeeCategory::CreatedAt))
                    .col(timestamp(FeeCategory::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeeCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FeeCategory {
    Table,
    Id,
    Name,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
